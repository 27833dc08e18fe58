mod alarm;
mod entry;
mod profile;

pub use alarm::{weekday_index, Alarm, ALL_DAYS};
pub use entry::{EntryCategory, EntryDetails, JournalEntry};
pub use profile::{Biometrics, UserProfile, DEFAULT_PROFILE_NAME};
