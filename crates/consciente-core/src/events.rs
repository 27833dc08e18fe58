use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::EntryCategory;

/// Every state change in the system produces an Event.
/// The CLI prints them; tests assert on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// An alarm matched the current minute and its notification was raised.
    AlarmTriggered {
        alarm_id: String,
        label: String,
        /// The `HH:MM` minute that matched.
        minute: String,
        at: DateTime<Utc>,
    },
    /// The active notification was cleared.
    AlarmDismissed {
        alarm_id: String,
        /// True when cleared by the auto-dismiss timeout rather than the user.
        automatic: bool,
        at: DateTime<Utc>,
    },
    /// A journal entry was persisted.
    EntrySaved {
        entry_id: String,
        category: EntryCategory,
        at: DateTime<Utc>,
    },
    /// Coach feedback was attached to an already-saved entry.
    FeedbackAttached {
        entry_id: String,
        /// False when the stored text is a fallback message.
        from_service: bool,
        at: DateTime<Utc>,
    },
}
