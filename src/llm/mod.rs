//! Completion-endpoint abstraction.
//!
//! The backend talks to an OpenAI-style chat-completion endpoint: role/content
//! pairs in, a single text reply out. The `LlmClient` trait is the seam that
//! lets the agent loop run against a scripted client in tests.

mod openai;

pub use openai::OpenAiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message role in a chat conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in a chat conversation.
///
/// The full message sequence is resent on every completion call; the endpoint
/// keeps no incremental context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Errors talking to the completion endpoint.
///
/// Any of these is fatal for the current request; the loop never retries.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Client for a chat-completion endpoint.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send the conversation and return the raw reply text.
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, LlmError>;
}
