//! Journal entries.
//!
//! Entries serialize to the same camelCase layout the browser application
//! writes: a flat object whose `category` field selects which of the
//! category-specific fields are present.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four kinds of journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryCategory {
    /// "Hasta aquí llegué": the user set a boundary.
    Boundary,
    /// Physical activity.
    Physical,
    /// Listening to a coach audio.
    Audio,
    /// A user-named category.
    Custom,
}

impl EntryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryCategory::Boundary => "boundary",
            EntryCategory::Physical => "physical",
            EntryCategory::Audio => "audio",
            EntryCategory::Custom => "custom",
        }
    }
}

impl std::fmt::Display for EntryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category-specific payload of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum EntryDetails {
    #[serde(rename_all = "camelCase")]
    Boundary {
        /// 1 (fresh) to 10 (exhausted).
        tiredness_level: u8,
        #[serde(default)]
        body_sensation: String,
        #[serde(default)]
        thought: String,
        #[serde(default)]
        context_reaction: String,
    },
    #[serde(rename_all = "camelCase")]
    Physical {
        did_activity: bool,
        #[serde(default)]
        transformation_note: String,
    },
    #[serde(rename_all = "camelCase")]
    Audio {
        listened: bool,
        #[serde(default)]
        emotion: String,
        #[serde(default)]
        body_sensation: String,
        #[serde(default)]
        thought: String,
    },
    #[serde(rename_all = "camelCase")]
    Custom {
        custom_category_name: String,
        #[serde(default)]
        transformation_note: String,
    },
}

impl EntryDetails {
    pub fn category(&self) -> EntryCategory {
        match self {
            EntryDetails::Boundary { .. } => EntryCategory::Boundary,
            EntryDetails::Physical { .. } => EntryCategory::Physical,
            EntryDetails::Audio { .. } => EntryCategory::Audio,
            EntryDetails::Custom { .. } => EntryCategory::Custom,
        }
    }
}

/// A single journal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub details: EntryDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_feedback: Option<String>,
}

impl JournalEntry {
    /// Create an entry stamped with a fresh id and the current time.
    pub fn new(details: EntryDetails) -> Self {
        Self::at(details, Utc::now())
    }

    pub fn at(details: EntryDetails, date: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            details,
            ai_feedback: None,
        }
    }

    pub fn category(&self) -> EntryCategory {
        self.details.category()
    }

    pub fn tiredness_level(&self) -> Option<u8> {
        match &self.details {
            EntryDetails::Boundary {
                tiredness_level, ..
            } => Some(*tiredness_level),
            _ => None,
        }
    }

    pub fn body_sensation(&self) -> Option<&str> {
        match &self.details {
            EntryDetails::Boundary { body_sensation, .. }
            | EntryDetails::Audio { body_sensation, .. } => non_empty(body_sensation),
            _ => None,
        }
    }

    pub fn thought(&self) -> Option<&str> {
        match &self.details {
            EntryDetails::Boundary { thought, .. } | EntryDetails::Audio { thought, .. } => {
                non_empty(thought)
            }
            _ => None,
        }
    }

    pub fn context_reaction(&self) -> Option<&str> {
        match &self.details {
            EntryDetails::Boundary {
                context_reaction, ..
            } => non_empty(context_reaction),
            _ => None,
        }
    }

    pub fn transformation_note(&self) -> Option<&str> {
        match &self.details {
            EntryDetails::Physical {
                transformation_note,
                ..
            }
            | EntryDetails::Custom {
                transformation_note,
                ..
            } => non_empty(transformation_note),
            _ => None,
        }
    }

    /// Whether the action the entry records actually happened: audio
    /// listened, activity done. Boundary and custom entries always count.
    pub fn completed(&self) -> bool {
        match &self.details {
            EntryDetails::Physical { did_activity, .. } => *did_activity,
            EntryDetails::Audio { listened, .. } => *listened,
            EntryDetails::Boundary { .. } | EntryDetails::Custom { .. } => true,
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
