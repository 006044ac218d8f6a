//! Configuration management for the AGENT48 backend.
//!
//! Configuration can be set via environment variables:
//! - `GRANITE_URL` - Optional. Base URL of the completion endpoint. Defaults to
//!   `http://localhost:8000/v1` (Docker Model Runner injects this automatically).
//! - `GRANITE_MODEL` - Optional. Model identifier. Defaults to `ai/granite-4.0-h-nano:latest`.
//! - `WORKSPACE_DIR` - Optional. Workspace root for tool operations. Defaults to `/workspace`.
//! - `HOST` - Optional. Server host. Defaults to `0.0.0.0`.
//! - `PORT` - Optional. Server port. Defaults to `8000`.
//! - `MAX_STEPS` - Optional. Maximum agent loop steps. Defaults to `5`.
//! - `TEMPERATURE` - Optional. Sampling temperature. Defaults to `0.2`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Agent configuration.
///
/// Constructed once at startup and passed by reference into the agent and the
/// API layer; there is no process-wide mutable state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the OpenAI-style completion endpoint
    pub model_url: String,

    /// Model identifier sent with every completion request
    pub model_id: String,

    /// Workspace directory all file and shell operations are rooted under
    pub workspace_dir: PathBuf,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Maximum completion calls per request
    pub max_steps: usize,

    /// Sampling temperature for completion requests
    pub temperature: f32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let model_url = std::env::var("GRANITE_URL")
            .unwrap_or_else(|_| "http://localhost:8000/v1".to_string());

        let model_id = std::env::var("GRANITE_MODEL")
            .unwrap_or_else(|_| "ai/granite-4.0-h-nano:latest".to_string());

        let workspace_dir = std::env::var("WORKSPACE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/workspace"));

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let max_steps = std::env::var("MAX_STEPS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("MAX_STEPS".to_string(), format!("{}", e)))?;

        let temperature = std::env::var("TEMPERATURE")
            .unwrap_or_else(|_| "0.2".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("TEMPERATURE".to_string(), format!("{}", e)))?;

        Ok(Self {
            model_url,
            model_id,
            workspace_dir,
            host,
            port,
            max_steps,
            temperature,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(model_url: String, model_id: String, workspace_dir: PathBuf) -> Self {
        Self {
            model_url,
            model_id,
            workspace_dir,
            host: "127.0.0.1".to_string(),
            port: 8000,
            max_steps: 5,
            temperature: 0.2,
        }
    }
}
