//! Agent module - the core turn loop.
//!
//! The loop sends the growing conversation to the completion endpoint,
//! extracts a single structured action from the raw reply, dispatches it to a
//! tool or terminates with an answer, and feeds the tool output back into the
//! conversation for the next round, bounded by a maximum step count.

mod action;
mod agent_loop;
mod prompt;

pub use action::{extract_action, ActionDescriptor, AgentAction};
pub use agent_loop::{Agent, AgentOutcome};
pub use prompt::SYSTEM_PROMPT;
