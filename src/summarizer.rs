//! LLM summarization client for an OpenAI-compatible chat completions API.
//!
//! The [`Summarize`] trait is the seam between the pipeline and the network:
//! the pipeline only ever sees `text in, text out`. [`ChatClient`] is the
//! production implementation; tests substitute stubs.
//!
//! Every request carries exactly two turns: the fixed system instruction and
//! one user turn with the chunk (or combined summary) text. The response
//! contract is the first choice's message content. Failures — transport,
//! auth, quota, or a response with no choices — propagate to the caller and
//! abort the run; there is no retry layer.

use serde::Deserialize;
use serde_json::json;
use std::error::Error;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// System instruction sent with every summarization request.
pub const SYSTEM_INSTRUCTION: &str = "Summarize the following news article.";

/// Trait for sending text to a summarization backend.
///
/// Implementors take a piece of text and return the generated summary.
/// The abstraction keeps the report pipeline independent of the wire
/// protocol and lets tests count and script calls.
pub trait Summarize {
    /// Summarize `text`, returning the generated summary.
    async fn summarize(&self, text: &str) -> Result<String, Box<dyn Error>>;
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// The credential, endpoint base, and model name are constructor inputs;
/// nothing is read from or written to process-global state.
pub struct ChatClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl ChatClient {
    /// Create a client for the given endpoint and credential.
    ///
    /// `api_base` is the URL prefix up to but not including
    /// `/chat/completions`, e.g. `https://api.openai.com/v1`.
    pub fn new(api_key: String, api_base: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_base,
            model,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl Summarize for ChatClient {
    #[instrument(level = "info", skip_all, fields(input_len = text.len()))]
    async fn summarize(&self, text: &str) -> Result<String, Box<dyn Error>> {
        let t0 = Instant::now();
        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_INSTRUCTION },
                { "role": "user", "content": text }
            ]
        });

        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .and_then(|r| r.error_for_status());

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!(elapsed_ms = t0.elapsed().as_millis() as u64, error = %e, "Summarization call failed");
                return Err(e.into());
            }
        };

        let body: ChatResponse = response.json().await?;
        let summary = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or("chat response contained no choices")?;

        debug!(
            elapsed_ms = t0.elapsed().as_millis() as u64,
            summary_len = summary.len(),
            "Summarization call succeeded"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_deserialization() {
        let json = r#"{
            "choices": [
                { "message": { "role": "assistant", "content": "A summary." } }
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content, "A summary.");
    }

    #[test]
    fn test_chat_response_first_choice_wins() {
        let json = r#"{
            "choices": [
                { "message": { "content": "first" } },
                { "message": { "content": "second" } }
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        let content = response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content);
        assert_eq!(content.as_deref(), Some("first"));
    }

    #[test]
    fn test_empty_choices_is_rejected() {
        let response: ChatResponse = serde_json::from_str(r#"{ "choices": [] }"#).unwrap();
        assert!(response.choices.into_iter().next().is_none());
    }
}
