//! Read-only views derived from the stored entries.

mod dashboard;
mod history;
mod locale;

pub use dashboard::{
    category_distribution, summary, tiredness_series, CategoryCount, Dashboard, Summary,
    TirednessPoint, TIREDNESS_WINDOW,
};
pub use history::{history, history_in, title, HistoryItem};
pub use locale::long_date;
