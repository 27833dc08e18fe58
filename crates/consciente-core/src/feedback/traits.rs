use std::future::Future;

use crate::error::FeedbackError;

/// A remote text generator: prompt in, free text out.
///
/// Implementations hold their own credentials. Whether one exists at all is
/// decided when the [`Coach`](super::Coach) is built.
pub trait FeedbackGenerator: Send + Sync {
    /// Generate a reply for `prompt`. An empty string is a valid reply.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, FeedbackError>> + Send;
}

impl<G: FeedbackGenerator> FeedbackGenerator for &G {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, FeedbackError>> + Send {
        (**self).generate(prompt)
    }
}
