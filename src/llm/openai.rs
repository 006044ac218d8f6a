//! OpenAI-compatible chat-completion client.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{ChatMessage, LlmClient, LlmError};

/// Client for an OpenAI-style `/chat/completions` endpoint.
///
/// Local model runners accept any bearer token, so the key defaults to a
/// placeholder.
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    /// Create a client against the given base URL (e.g. `http://localhost:8000/v1`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: "not-needed".to_string(),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, LlmError> {
        let body = json!({
            "model": model,
            "messages": messages,
            "temperature": temperature,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: Value = response.json().await?;
        parse_reply(&payload)
    }
}

/// Pull the reply text out of a chat-completion response body.
fn parse_reply(payload: &Value) -> Result<String, LlmError> {
    payload["choices"]
        .get(0)
        .and_then(|choice| choice["message"]["content"].as_str())
        .map(|content| content.to_string())
        .ok_or_else(|| {
            LlmError::MalformedResponse(format!(
                "missing choices[0].message.content in: {}",
                payload
            ))
        })
}
