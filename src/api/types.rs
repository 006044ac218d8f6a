//! API request and response types.

use serde::{Deserialize, Serialize};

/// Request to run the agent over a prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecuteRequest {
    /// The user prompt
    pub prompt: String,
}

/// Response for one agent run.
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteResponse {
    /// Ordered audit log of model replies and tool invocations
    pub trajectory: Vec<TrajectoryEntry>,

    /// The final answer, absent when the step bound was reached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_answer: Option<String>,

    /// Distinguished non-error status, currently only "maximum steps reached"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A single entry in the trajectory.
///
/// Serialized by shape: `{"agent": ...}` for a model reply,
/// `{"tool": ..., "output": ...}` for a tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrajectoryEntry {
    /// A raw model reply
    Agent { agent: String },
    /// A tool invocation and its text result
    Tool { tool: String, output: String },
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}
