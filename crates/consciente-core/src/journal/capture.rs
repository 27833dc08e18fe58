//! Entry form submission.
//!
//! Saving and attaching feedback are two separate writes: the entry is on
//! disk before the coach is consulted, and a failed or slow coach only ever
//! affects the second write.

use chrono::Utc;
use tracing::{info, warn};

use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::feedback::{Coach, FeedbackGenerator};
use crate::model::{EntryDetails, JournalEntry};
use crate::storage::{KvStore, Store};

/// Highest value on the tiredness scale.
pub const MAX_TIREDNESS: u8 = 10;

/// Form-level checks run before anything is saved.
///
/// # Errors
/// A missing required field or a tiredness level outside 1–10.
pub fn validate(details: &EntryDetails) -> Result<(), ValidationError> {
    match details {
        EntryDetails::Boundary {
            tiredness_level,
            body_sensation,
            ..
        } => {
            if !(1..=MAX_TIREDNESS).contains(tiredness_level) {
                return Err(ValidationError::InvalidValue {
                    field: "tirednessLevel".into(),
                    message: format!("{tiredness_level} is not between 1 and {MAX_TIREDNESS}"),
                });
            }
            require("bodySensation", body_sensation)
        }
        EntryDetails::Physical {
            transformation_note,
            ..
        } => require("transformationNote", transformation_note),
        EntryDetails::Audio { .. } => Ok(()),
        EntryDetails::Custom {
            custom_category_name,
            transformation_note,
        } => {
            require("customCategoryName", custom_category_name)?;
            require("transformationNote", transformation_note)
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

/// What a submission produced.
#[derive(Debug, Clone)]
pub struct Submission {
    /// The entry as last written, feedback included when it was attached.
    pub entry: JournalEntry,
    pub events: Vec<Event>,
}

/// Validate, persist, then ask the coach and attach its reply.
///
/// # Errors
/// Validation failures (nothing is written) and failure of the first save.
/// A failure to attach feedback is logged and the entry is returned without
/// it.
pub async fn submit<K, G>(
    store: &Store<K>,
    coach: &Coach<G>,
    details: EntryDetails,
) -> Result<Submission>
where
    K: KvStore,
    G: FeedbackGenerator,
{
    validate(&details)?;

    let mut entry = JournalEntry::new(details);
    store.save_entry(&entry)?;
    info!(entry_id = %entry.id, category = %entry.category(), "entry saved");

    let mut events = vec![Event::EntrySaved {
        entry_id: entry.id.clone(),
        category: entry.category(),
        at: Utc::now(),
    }];

    let feedback = coach.feedback_for(&entry).await;
    let mut with_feedback = entry.clone();
    with_feedback.ai_feedback = Some(feedback.text);
    match store.update_entry(&with_feedback) {
        Ok(_) => {
            entry = with_feedback;
            events.push(Event::FeedbackAttached {
                entry_id: entry.id.clone(),
                from_service: feedback.from_service,
                at: Utc::now(),
            });
        }
        Err(e) => warn!(entry_id = %entry.id, error = %e, "failed to attach feedback"),
    }

    Ok(Submission { entry, events })
}
