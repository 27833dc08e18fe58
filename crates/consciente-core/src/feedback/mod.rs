//! Coach feedback: the text generator seam, the Gemini client behind it and
//! the prompts and fallbacks layered on top.

mod coach;
mod gemini;
pub mod prompts;
mod traits;

pub use coach::{
    Coach, Feedback, FALLBACK_EMPTY_REPLY, FALLBACK_MISSING_KEY, FALLBACK_SERVICE_ERROR,
    FALLBACK_WEEKLY_ERROR,
};
pub use gemini::GeminiClient;
pub use traits::FeedbackGenerator;
