//! Aggregates shown on the dashboard.

use chrono::{DateTime, Datelike, Local, TimeZone};
use serde::Serialize;

use super::locale::short_weekday;
use crate::model::{EntryCategory, JournalEntry};

/// How many boundary entries the tiredness chart covers.
pub const TIREDNESS_WINDOW: usize = 7;

/// Headline counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub boundaries: usize,
    /// Audio entries marked as listened.
    pub audios_listened: usize,
    /// Physical entries where the activity was done.
    pub physical_done: usize,
}

/// One point of the tiredness chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TirednessPoint {
    /// Short Spanish weekday plus day of month, e.g. "lun 14".
    pub label: String,
    pub value: u8,
}

/// One slice of the category distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: &'static str,
    pub value: usize,
}

/// Everything the dashboard renders. `None` from [`Dashboard::build`] means
/// there is nothing to show yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub summary: Summary,
    pub tiredness: Vec<TirednessPoint>,
    pub distribution: Vec<CategoryCount>,
}

impl Dashboard {
    /// Build the dashboard with chart labels in local time.
    pub fn build(entries: &[JournalEntry]) -> Option<Self> {
        Self::build_in(entries, &Local)
    }

    pub fn build_in<Tz: TimeZone>(entries: &[JournalEntry], tz: &Tz) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            summary: summary(entries),
            tiredness: tiredness_series(entries, tz),
            distribution: category_distribution(entries),
        })
    }
}

pub fn summary(entries: &[JournalEntry]) -> Summary {
    entries
        .iter()
        .fold(Summary::default(), |mut acc, entry| {
            match entry.category() {
                EntryCategory::Boundary => acc.boundaries += 1,
                EntryCategory::Audio if entry.completed() => acc.audios_listened += 1,
                EntryCategory::Physical if entry.completed() => acc.physical_done += 1,
                _ => {}
            }
            acc
        })
}

/// The latest boundary entries, oldest first.
pub fn tiredness_series<Tz: TimeZone>(entries: &[JournalEntry], tz: &Tz) -> Vec<TirednessPoint> {
    let mut boundaries: Vec<(&DateTime<chrono::Utc>, u8)> = entries
        .iter()
        .filter_map(|e| e.tiredness_level().map(|level| (&e.date, level)))
        .collect();
    boundaries.sort_by_key(|(date, _)| **date);

    let skip = boundaries.len().saturating_sub(TIREDNESS_WINDOW);
    boundaries
        .into_iter()
        .skip(skip)
        .map(|(date, value)| {
            let local = date.with_timezone(tz);
            TirednessPoint {
                label: format!("{} {}", short_weekday(local.weekday()), local.day()),
                value,
            }
        })
        .collect()
}

/// Entry counts per bucket, empty buckets left out.
pub fn category_distribution(entries: &[JournalEntry]) -> Vec<CategoryCount> {
    let mut counts = [0usize; 4];
    for entry in entries {
        let slot = match entry.category() {
            EntryCategory::Boundary => 0,
            EntryCategory::Physical => 1,
            EntryCategory::Audio => 2,
            EntryCategory::Custom => 3,
        };
        counts[slot] += 1;
    }
    ["Límites", "Físico", "Audio", "Otro"]
        .into_iter()
        .zip(counts)
        .filter(|(_, value)| *value > 0)
        .map(|(name, value)| CategoryCount { name, value })
        .collect()
}
