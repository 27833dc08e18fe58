//! The coach: prompts plus fixed fallbacks over an optional generator.
//!
//! Nothing here returns an error. A missing key, an empty reply or a failed
//! request all turn into one of the fallback strings below so the caller can
//! attach whatever comes back to the entry.

use tracing::{debug, info, warn};

use super::gemini::GeminiClient;
use super::prompts::{entry_prompt, weekly_prompt};
use super::traits::FeedbackGenerator;
use crate::error::FeedbackError;
use crate::model::JournalEntry;
use crate::storage::FeedbackConfig;

pub const FALLBACK_MISSING_KEY: &str = "Configura tu API Key para recibir feedback del coach.";
pub const FALLBACK_EMPTY_REPLY: &str = "No se pudo generar un consejo en este momento.";
pub const FALLBACK_SERVICE_ERROR: &str = "Hubo un error al conectar con tu coach virtual.";
pub const FALLBACK_WEEKLY_ERROR: &str = "No se pudo generar el resumen.";

/// Text produced for an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    /// False when `text` is one of the fallback messages.
    pub from_service: bool,
}

impl Feedback {
    fn fallback(text: &str) -> Self {
        Self {
            text: text.to_string(),
            from_service: false,
        }
    }
}

/// Feedback generation with fallbacks. `None` means no credentials.
pub struct Coach<G> {
    generator: Option<G>,
}

impl Coach<GeminiClient> {
    /// A Gemini-backed coach. Degrades to the unconfigured coach when no API
    /// key is available or the client cannot be built.
    pub fn from_config(config: &FeedbackConfig) -> Self {
        match GeminiClient::from_config(config) {
            Ok(client) => {
                debug!(model = client.model(), "feedback client ready");
                Self::new(client)
            }
            Err(FeedbackError::MissingApiKey) => Self::unconfigured(),
            Err(e) => {
                warn!(error = %e, "failed to build feedback client");
                Self::unconfigured()
            }
        }
    }
}

impl<G: FeedbackGenerator> Coach<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    pub fn unconfigured() -> Self {
        Self { generator: None }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// Short feedback on a single entry. Always returns displayable text.
    pub async fn analyze_entry(&self, entry: &JournalEntry) -> String {
        self.feedback_for(entry).await.text
    }

    /// Like [`Coach::analyze_entry`] but also reports whether the text came
    /// from the service or is a fallback.
    pub async fn feedback_for(&self, entry: &JournalEntry) -> Feedback {
        let Some(generator) = &self.generator else {
            return Feedback::fallback(FALLBACK_MISSING_KEY);
        };
        match generator.generate(&entry_prompt(entry)).await {
            Ok(text) if text.trim().is_empty() => Feedback::fallback(FALLBACK_EMPTY_REPLY),
            Ok(text) => {
                info!(entry_id = %entry.id, "feedback received");
                Feedback {
                    text,
                    from_service: true,
                }
            }
            Err(e) => {
                warn!(entry_id = %entry.id, error = %e, "feedback request failed");
                Feedback::fallback(FALLBACK_SERVICE_ERROR)
            }
        }
    }

    /// Motivational summary of the latest entries (newest first). Empty when
    /// there is no key or nothing to summarize.
    pub async fn weekly_insight(&self, entries: &[JournalEntry]) -> String {
        let Some(generator) = &self.generator else {
            return String::new();
        };
        if entries.is_empty() {
            return String::new();
        }
        let prompt = match weekly_prompt(entries) {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!(error = %e, "failed to serialize entries for weekly insight");
                return FALLBACK_WEEKLY_ERROR.to_string();
            }
        };
        match generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "weekly insight request failed");
                FALLBACK_WEEKLY_ERROR.to_string()
            }
        }
    }
}
