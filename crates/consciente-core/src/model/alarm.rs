use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Weekday indices 0 (Sunday) through 6 (Saturday).
pub const ALL_DAYS: [u8; 7] = [0, 1, 2, 3, 4, 5, 6];

/// A daily reminder.
///
/// `time` is a zero-padded 24-hour `HH:MM` string and is compared verbatim
/// against the current minute, so a malformed value simply never fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    pub id: String,
    pub time: String,
    pub label: String,
    pub active: bool,
    #[serde(default)]
    pub days: Vec<u8>,
}

impl Alarm {
    /// A new active alarm for every day of the week.
    pub fn new(time: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            time: time.into(),
            label: label.into(),
            active: true,
            days: ALL_DAYS.to_vec(),
        }
    }

    /// True when the alarm is active and set for exactly this `HH:MM` minute.
    pub fn matches_minute(&self, minute: &str) -> bool {
        self.active && self.time == minute
    }
}

/// Weekday index (0 = Sunday) of a date-like value.
pub fn weekday_index(date: &impl Datelike) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}
