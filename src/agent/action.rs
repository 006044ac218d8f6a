//! Action extraction from raw model replies.
//!
//! The model is instructed to embed a JSON action descriptor in its reply.
//! Extraction is a best-effort heuristic: slice from the first `{` to the
//! last `}` and try to parse that span. It assumes at most one descriptor per
//! reply and that it is the outermost brace-delimited span. Known failure
//! modes: unrelated braces before or after the descriptor widen the slice so
//! the parse fails, and a reply with multiple candidate spans is mis-sliced
//! across all of them. Either way the result is "no action", which the loop
//! treats as a plain-text final answer, not an error.

use std::collections::HashMap;

use serde::Deserialize;

use crate::tools::ToolInvocation;

/// The structured `{action, params}` object a reply embeds to request a tool
/// call or terminate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionDescriptor {
    pub action: String,
    #[serde(default)]
    pub params: HashMap<String, String>,
}

/// Locate and parse the action descriptor embedded in a reply, if any.
pub fn extract_action(reply: &str) -> Option<ActionDescriptor> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&reply[start..=end]).ok()
}

/// A descriptor classified against the closed set of dispatchable actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentAction {
    /// Terminal action; `answer` is absent when the param is missing.
    FinalAnswer { answer: Option<String> },
    /// A registered tool with valid parameters.
    Tool(ToolInvocation),
    /// Unknown action name, or a known tool missing a required parameter.
    /// The loop treats this the same as no action at all.
    Unrecognized,
}

impl AgentAction {
    pub fn classify(descriptor: ActionDescriptor) -> Self {
        if descriptor.action == "final_answer" {
            return Self::FinalAnswer {
                answer: descriptor.params.get("answer").cloned(),
            };
        }
        match ToolInvocation::from_descriptor(&descriptor.action, &descriptor.params) {
            Some(call) => Self::Tool(call),
            None => Self::Unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(reply: &str) -> Option<ActionDescriptor> {
        extract_action(reply)
    }

    #[test]
    fn no_braces_means_no_action() {
        assert_eq!(descriptor("The answer is four."), None);
    }

    #[test]
    fn bare_descriptor_parses() {
        let action = descriptor(r#"{"action":"final_answer","params":{"answer":"4"}}"#).unwrap();
        assert_eq!(action.action, "final_answer");
        assert_eq!(action.params.get("answer").unwrap(), "4");
    }

    #[test]
    fn descriptor_embedded_in_prose_parses() {
        let reply = r#"Very good. I shall proceed.
{"action":"read_file","params":{"path":"notes.txt"}}
That should do it."#;
        let action = descriptor(reply).unwrap();
        assert_eq!(action.action, "read_file");
    }

    #[test]
    fn params_default_to_empty() {
        let action = descriptor(r#"{"action":"final_answer"}"#).unwrap();
        assert!(action.params.is_empty());
    }

    #[test]
    fn invalid_json_in_braces_means_no_action() {
        assert_eq!(descriptor("{not json at all}"), None);
    }

    #[test]
    fn closing_brace_before_opening_means_no_action() {
        assert_eq!(descriptor("} nothing here {"), None);
    }

    #[test]
    fn multiple_brace_spans_are_mis_sliced() {
        // The slice runs from the first `{` to the last `}`, swallowing both
        // spans; the widened slice fails to parse. Documented heuristic
        // behavior, kept on purpose.
        let reply = r#"set {x} first, then {"action":"run_command","params":{"command":"ls"}}"#;
        assert_eq!(descriptor(reply), None);
    }

    #[test]
    fn non_string_param_values_fail_the_parse() {
        // Params are a string-to-string mapping; anything else is no action.
        assert_eq!(
            descriptor(r#"{"action":"run_command","params":{"command":42}}"#),
            None
        );
    }

    #[test]
    fn classify_final_answer() {
        let action = descriptor(r#"{"action":"final_answer","params":{"answer":"done"}}"#).unwrap();
        assert_eq!(
            AgentAction::classify(action),
            AgentAction::FinalAnswer {
                answer: Some("done".to_string())
            }
        );
    }

    #[test]
    fn classify_final_answer_without_answer_param() {
        let action = descriptor(r#"{"action":"final_answer","params":{}}"#).unwrap();
        assert_eq!(
            AgentAction::classify(action),
            AgentAction::FinalAnswer { answer: None }
        );
    }

    #[test]
    fn classify_registered_tool() {
        let action =
            descriptor(r#"{"action":"write_file","params":{"path":"a.txt","content":"hi"}}"#)
                .unwrap();
        assert_eq!(
            AgentAction::classify(action),
            AgentAction::Tool(ToolInvocation::WriteFile {
                path: "a.txt".to_string(),
                content: "hi".to_string()
            })
        );
    }

    #[test]
    fn classify_unknown_name_as_unrecognized() {
        let action = descriptor(r#"{"action":"launch_missiles","params":{}}"#).unwrap();
        assert_eq!(AgentAction::classify(action), AgentAction::Unrecognized);
    }

    #[test]
    fn classify_missing_param_as_unrecognized() {
        let action = descriptor(r#"{"action":"run_command","params":{}}"#).unwrap();
        assert_eq!(AgentAction::classify(action), AgentAction::Unrecognized);
    }
}
