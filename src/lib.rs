//! # AGENT48 Backend
//!
//! A minimal HTTP backend for a tool-using AI coding agent.
//!
//! This library provides:
//! - An HTTP API for submitting a prompt and receiving the agent's answer
//! - A bounded agent loop that parses actions out of raw model completions
//! - Workspace tools for running commands and reading/writing files
//!
//! ## Architecture
//!
//! The agent follows the "tools in a loop" pattern:
//! 1. Receive a prompt via the API
//! 2. Seed the conversation with the system prompt and the user prompt
//! 3. Call the completion endpoint, extract the action embedded in the reply
//! 4. Execute the tool and feed its output back, repeat until a final answer
//!    or the step bound is reached
//!
//! ## Example
//!
//! ```rust,ignore
//! use agent48_backend::{agent::Agent, config::Config};
//!
//! let config = Config::from_env()?;
//! let agent = Agent::new(&config);
//! let outcome = agent.execute("Create a hello world script").await?;
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod llm;
pub mod tools;

pub use config::Config;
