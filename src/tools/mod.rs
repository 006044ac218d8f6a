//! Workspace tools available to the agent.
//!
//! Every tool is a single blocking call into the operating system, rooted at
//! the configured workspace directory. Tools never propagate errors to the
//! agent loop: each one catches its own faults and encodes them into its
//! string result, so the model can see the failure and react.

mod filesystem;
mod terminal;

use std::collections::HashMap;
use std::path::PathBuf;

/// A fully-classified tool call, with its parameters already validated.
///
/// A closed enum rather than a string-keyed function table, so dispatch is
/// matched exhaustively at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolInvocation {
    /// Execute a shell command in the workspace root.
    RunCommand { command: String },
    /// Write a file under the workspace root, creating parent directories.
    WriteFile { path: String, content: String },
    /// Read a file under the workspace root.
    ReadFile { path: String },
}

impl ToolInvocation {
    /// Build an invocation from an action name and its string parameters.
    ///
    /// Returns `None` for unknown names and for known names missing a
    /// required parameter; both degrade to the plain-text answer path.
    pub fn from_descriptor(name: &str, params: &HashMap<String, String>) -> Option<Self> {
        match name {
            "run_command" => Some(Self::RunCommand {
                command: params.get("command")?.clone(),
            }),
            "write_file" => Some(Self::WriteFile {
                path: params.get("path")?.clone(),
                content: params.get("content")?.clone(),
            }),
            "read_file" => Some(Self::ReadFile {
                path: params.get("path")?.clone(),
            }),
            _ => None,
        }
    }

    /// The action name this invocation was dispatched under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RunCommand { .. } => "run_command",
            Self::WriteFile { .. } => "write_file",
            Self::ReadFile { .. } => "read_file",
        }
    }
}

/// Executes tool invocations inside a fixed workspace root.
pub struct ToolRegistry {
    workspace: PathBuf,
}

impl ToolRegistry {
    pub fn new(workspace: PathBuf) -> Self {
        Self { workspace }
    }

    /// Execute a tool call and return its text result.
    ///
    /// Infallible by contract: tool faults come back as error text in the
    /// result string, never as an `Err`.
    pub async fn invoke(&self, call: &ToolInvocation) -> String {
        tracing::info!(tool = call.name(), "executing tool");
        match call {
            ToolInvocation::RunCommand { command } => {
                terminal::run_command(&self.workspace, command).await
            }
            ToolInvocation::WriteFile { path, content } => {
                filesystem::write_file(&self.workspace, path, content).await
            }
            ToolInvocation::ReadFile { path } => {
                filesystem::read_file(&self.workspace, path).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn classifies_known_tools() {
        let call = ToolInvocation::from_descriptor("run_command", &params(&[("command", "ls")]));
        assert_eq!(
            call,
            Some(ToolInvocation::RunCommand {
                command: "ls".to_string()
            })
        );
    }

    #[test]
    fn rejects_unknown_name() {
        assert_eq!(
            ToolInvocation::from_descriptor("delete_everything", &params(&[])),
            None
        );
    }

    #[test]
    fn rejects_missing_required_param() {
        assert_eq!(
            ToolInvocation::from_descriptor("write_file", &params(&[("path", "a.txt")])),
            None
        );
    }

    #[tokio::test]
    async fn invoke_dispatches_to_read_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("note.txt"), "contents").unwrap();

        let registry = ToolRegistry::new(dir.path().to_path_buf());
        let output = registry
            .invoke(&ToolInvocation::ReadFile {
                path: "note.txt".to_string(),
            })
            .await;
        assert_eq!(output, "contents");
    }
}
