use crate::ui::mvi::Intent;
use crate::variable::{Variable, VariableArguments, VariableKind};

/// Intents that can be dispatched to a variable edit session.
#[derive(Debug, Clone)]
pub enum VariableEditIntent {
    /// Open the session on a copy of `source`. A loaded variable is
    /// assumed valid until an edit says otherwise.
    Initialize { source: Variable },

    /// User picked a kind from the kind selector.
    ChangeKind { kind: VariableKind },

    /// The argument editor reported a new payload for the current kind.
    /// A payload of any other kind is rejected and marks the arguments
    /// invalid.
    ApplyArgumentEdit {
        arguments: VariableArguments,
        is_valid: bool,
    },

    /// The argument editor picked a default value.
    SelectDefault { selection: String },

    /// Discard the working copy.
    Close,
}

impl Intent for VariableEditIntent {}
