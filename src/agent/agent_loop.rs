//! Core agent loop implementation.

use std::sync::Arc;

use crate::api::types::TrajectoryEntry;
use crate::config::Config;
use crate::llm::{ChatMessage, LlmClient, LlmError, OpenAiClient};
use crate::tools::ToolRegistry;

use super::action::{extract_action, AgentAction};
use super::prompt::SYSTEM_PROMPT;

/// The result of one bounded agent run.
///
/// Either `final_answer` is set (the loop reached a terminal reply) or
/// `status` reports step exhaustion; the trajectory is always returned in
/// full, unfiltered.
#[derive(Debug)]
pub struct AgentOutcome {
    pub trajectory: Vec<TrajectoryEntry>,
    pub final_answer: Option<String>,
    pub status: Option<String>,
}

/// The tool-using agent.
pub struct Agent {
    config: Config,
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
}

impl Agent {
    /// Create a new agent with the given configuration.
    pub fn new(config: &Config) -> Self {
        let llm = Arc::new(OpenAiClient::new(config.model_url.clone()));
        Self::with_client(config, llm)
    }

    /// Create an agent backed by an explicit completion client.
    pub fn with_client(config: &Config, llm: Arc<dyn LlmClient>) -> Self {
        let tools = ToolRegistry::new(config.workspace_dir.clone());
        Self {
            config: config.clone(),
            llm,
            tools,
        }
    }

    /// Run the turn loop over a prompt and return the outcome.
    ///
    /// Per step: call the completion endpoint, record the reply, extract and
    /// classify its action. A tool action is executed and fed back into the
    /// conversation; `final_answer` terminates with the given answer; any
    /// reply without a dispatchable action terminates with the raw reply as
    /// the answer. At most `max_steps` completion calls are made.
    ///
    /// # Errors
    ///
    /// Returns `LlmError` if the completion endpoint is unreachable or its
    /// response is malformed. This aborts the request; tool faults never do
    /// (they are encoded into the tool result text instead).
    pub async fn execute(&self, prompt: &str) -> Result<AgentOutcome, LlmError> {
        let mut messages = vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)];
        let mut trajectory = Vec::new();

        for step in 0..self.config.max_steps {
            tracing::debug!("Agent step {}", step + 1);

            let reply = self
                .llm
                .complete(&self.config.model_id, &messages, self.config.temperature)
                .await?;
            trajectory.push(TrajectoryEntry::Agent {
                agent: reply.clone(),
            });

            match extract_action(&reply).map(AgentAction::classify) {
                Some(AgentAction::FinalAnswer { answer }) => {
                    return Ok(AgentOutcome {
                        trajectory,
                        final_answer: answer,
                        status: None,
                    });
                }
                Some(AgentAction::Tool(call)) => {
                    let output = self.tools.invoke(&call).await;
                    // The assistant reply goes in first, then the tool output
                    // as a user message, so roles keep strictly alternating.
                    messages.push(ChatMessage::assistant(reply));
                    messages.push(ChatMessage::user(format!("[TOOL OUTPUT]: {}", output)));
                    trajectory.push(TrajectoryEntry::Tool {
                        tool: call.name().to_string(),
                        output,
                    });
                }
                // An unrecognized action degrades to the plain-text path: the
                // raw reply is the final answer. Flagged for product review;
                // do not turn this into an error.
                Some(AgentAction::Unrecognized) | None => {
                    return Ok(AgentOutcome {
                        trajectory,
                        final_answer: Some(reply),
                        status: None,
                    });
                }
            }
        }

        Ok(AgentOutcome {
            trajectory,
            final_answer: None,
            status: Some("maximum steps reached".to_string()),
        })
    }
}
