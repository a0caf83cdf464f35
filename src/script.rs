//! Edit scripts: recorded argument-editor and host events, replayed
//! against a [`VariableEditFlow`].
//!
//! A script is a JSON array of steps:
//!
//! ```json
//! [
//!   {"action": "change_kind", "kind": "map"},
//!   {"action": "edit_arguments", "arguments": {"type": "map", "values": {"x": "1"}}, "is_valid": true},
//!   {"action": "select_default", "selection": "x"},
//!   {"action": "submit"}
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::ui::variable_edit::VariableEditFlow;
use crate::variable::{Variable, VariableArguments, VariableUpdater};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    ChangeKind {
        kind: String,
    },
    EditArguments {
        arguments: VariableArguments,
        is_valid: bool,
    },
    SelectDefault {
        selection: String,
    },
    Submit,
    Cancel,
}

/// How a replayed script left the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptOutcome {
    Submitted(Variable),
    Dismissed,
    /// The script ran out while the session was still open.
    Open,
}

pub fn parse_script(content: &str) -> Result<Vec<ScriptStep>, serde_json::Error> {
    serde_json::from_str(content)
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, ScriptError> {
    let content = fs::read_to_string(path).map_err(|e| ScriptError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_script(&content).map_err(|e| ScriptError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Replay `steps` in order.
///
/// A refused submit leaves the session open and replay continues. Steps
/// after the session ends are skipped.
pub fn run_script<U, D>(flow: &mut VariableEditFlow<U, D>, steps: Vec<ScriptStep>) -> ScriptOutcome
where
    U: VariableUpdater,
    D: FnMut(),
{
    let total = steps.len();

    for (index, step) in steps.into_iter().enumerate() {
        let outcome = match step {
            ScriptStep::ChangeKind { kind } => {
                flow.session_mut().change_kind(&kind);
                None
            }
            ScriptStep::EditArguments {
                arguments,
                is_valid,
            } => {
                flow.session_mut().apply_argument_edit(arguments, is_valid);
                None
            }
            ScriptStep::SelectDefault { selection } => {
                flow.session_mut().select_default(selection);
                None
            }
            ScriptStep::Submit => match flow.submit() {
                Ok(variable) => Some(ScriptOutcome::Submitted(variable)),
                Err(err) => {
                    tracing::warn!(step = index, error = %err, "Submit refused");
                    None
                }
            },
            ScriptStep::Cancel => {
                flow.cancel();
                Some(ScriptOutcome::Dismissed)
            }
        };

        if let Some(outcome) = outcome {
            let skipped = total - index - 1;
            if skipped > 0 {
                tracing::warn!(skipped, "Session ended before the script did");
            }
            return outcome;
        }
    }

    ScriptOutcome::Open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_step_kind() {
        let steps = parse_script(
            r#"[
                {"action": "change_kind", "kind": "constant"},
                {"action": "edit_arguments", "arguments": {"type": "constant", "values": ["a"]}, "is_valid": true},
                {"action": "select_default", "selection": "a"},
                {"action": "submit"},
                {"action": "cancel"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            steps,
            vec![
                ScriptStep::ChangeKind {
                    kind: "constant".into()
                },
                ScriptStep::EditArguments {
                    arguments: VariableArguments::Constant(vec!["a".into()]),
                    is_valid: true,
                },
                ScriptStep::SelectDefault {
                    selection: "a".into()
                },
                ScriptStep::Submit,
                ScriptStep::Cancel,
            ]
        );
    }

    #[test]
    fn unknown_action_is_a_parse_error() {
        assert!(parse_script(r#"[{"action": "rename", "name": "x"}]"#).is_err());
    }
}
