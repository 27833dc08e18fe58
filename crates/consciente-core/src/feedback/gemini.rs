//! Gemini `generateContent` client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::traits::FeedbackGenerator;
use crate::error::FeedbackError;
use crate::storage::FeedbackConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    endpoint: String,
    http_client: Client,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Build a client from the `[feedback]` section.
    ///
    /// # Errors
    /// `MissingApiKey` when neither the config nor the environment holds a
    /// key; `Http` if the HTTP client cannot be built.
    pub fn from_config(config: &FeedbackConfig) -> Result<Self, FeedbackError> {
        let api_key = config
            .resolved_api_key()
            .ok_or(FeedbackError::MissingApiKey)?;
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            api_key,
            model: config.model.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }

    async fn request(&self, prompt: &str) -> Result<String, FeedbackError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        debug!(model = %self.model, prompt_chars = prompt.chars().count(), "requesting feedback");
        let resp = self
            .http_client
            .post(self.url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FeedbackError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = resp.text().await?;
        let parsed: GenerateResponse = serde_json::from_str(&raw)
            .map_err(|e| FeedbackError::MalformedResponse(e.to_string()))?;
        Ok(reply_text(&parsed))
    }
}

/// Concatenated text parts of the first candidate.
fn reply_text(response: &GenerateResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| content.parts.iter().map(|p| p.text.as_str()).collect())
        .unwrap_or_default()
}

impl FeedbackGenerator for GeminiClient {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, FeedbackError>> + Send {
        self.request(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str) -> FeedbackConfig {
        FeedbackConfig {
            api_key: "test-key".into(),
            model: "gemini-test".into(),
            endpoint: endpoint.into(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let client = GeminiClient::from_config(&config("https://example.com/")).unwrap();
        assert_eq!(client.model(), "gemini-test");
        assert_eq!(
            client.url(),
            "https://example.com/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn reply_text_concatenates_parts_of_first_candidate() {
        let parsed: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"Hola, "},{"text":"bien hecho."}]}},
                {"content":{"parts":[{"text":"ignorado"}]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(reply_text(&parsed), "Hola, bien hecho.");
    }

    #[test]
    fn reply_text_is_empty_without_candidates() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(reply_text(&parsed), "");
    }

    #[tokio::test]
    async fn sends_prompt_with_api_key_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-test:generateContent")
            .match_header("x-goog-api-key", "test-key")
            .match_body(mockito::Matcher::PartialJson(json!({
                "contents": [{ "parts": [{ "text": "hola" }] }]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"Respira."}]}}]}"#)
            .create_async()
            .await;

        let client = GeminiClient::from_config(&config(&server.url())).unwrap();
        let reply = client.generate("hola").await.unwrap();
        assert_eq!(reply, "Respira.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1beta/models/gemini-test:generateContent")
            .with_status(403)
            .with_body("forbidden")
            .create_async()
            .await;

        let client = GeminiClient::from_config(&config(&server.url())).unwrap();
        let err = client.generate("hola").await.unwrap_err();
        assert!(matches!(err, FeedbackError::Status { status: 403, .. }));
    }

    #[tokio::test]
    async fn garbage_body_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1beta/models/gemini-test:generateContent")
            .with_status(200)
            .with_body("<html>")
            .create_async()
            .await;

        let client = GeminiClient::from_config(&config(&server.url())).unwrap();
        let err = client.generate("hola").await.unwrap_err();
        assert!(matches!(err, FeedbackError::MalformedResponse(_)));
    }
}
