use crate::ui::mvi::Reducer;
use crate::variable::{Variable, VariableArguments, VariableKind, VariableLookup};

use super::error::EditError;
use super::intent::VariableEditIntent;
use super::reducer::VariableEditReducer;
use super::state::{EditStatus, VariableEditState};

/// The single in-progress edit of one variable.
///
/// Each operation dispatches one intent through [`VariableEditReducer`]
/// and returns the resulting state. Events are applied strictly in call
/// order; every call replaces the state before returning.
#[derive(Debug, Clone, Default)]
pub struct VariableEditSession {
    state: VariableEditState,
}

impl VariableEditSession {
    /// Start a session on `source`. The session owns its own copy.
    pub fn initialize(source: Variable) -> Self {
        tracing::info!(
            variable_id = %source.id,
            kind = %source.kind(),
            "Variable edit session started"
        );
        let mut session = Self::default();
        session.dispatch(VariableEditIntent::Initialize { source });
        session
    }

    /// Resolve `id` in `directory` and start a session on it.
    ///
    /// # Errors
    /// Returns [`EditError::NotFound`] if the directory has no such variable.
    pub fn open(directory: &impl VariableLookup, id: &str) -> Result<Self, EditError> {
        let source = directory
            .find_variable(id)
            .ok_or_else(|| EditError::NotFound { id: id.to_string() })?;
        Ok(Self::initialize(source))
    }

    pub fn state(&self) -> &VariableEditState {
        &self.state
    }

    pub fn working_variable(&self) -> Option<&Variable> {
        self.state.working_variable()
    }

    pub fn status(&self) -> Option<EditStatus> {
        self.state.status()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Switch the variable to another kind, resetting its arguments.
    ///
    /// Unknown kind tokens leave the state untouched.
    pub fn change_kind(&mut self, kind: &str) -> &VariableEditState {
        match kind.parse::<VariableKind>() {
            Ok(kind) => {
                if self.is_open() {
                    tracing::debug!(%kind, "Variable kind changed, arguments reset");
                }
                self.dispatch(VariableEditIntent::ChangeKind { kind })
            }
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring kind change");
                &self.state
            }
        }
    }

    /// Store a payload reported by the argument editor.
    ///
    /// The payload is kept verbatim; `is_valid` is taken as authoritative.
    /// A payload for a different kind is dropped and the arguments become
    /// invalid.
    pub fn apply_argument_edit(
        &mut self,
        arguments: VariableArguments,
        is_valid: bool,
    ) -> &VariableEditState {
        if let Some(working) = self.working_variable() {
            if working.kind() == arguments.kind() {
                tracing::debug!(kind = %arguments.kind(), is_valid, "Arguments edited");
            } else {
                tracing::warn!(
                    current = %working.kind(),
                    reported = %arguments.kind(),
                    "Rejecting arguments for a different kind, marking invalid"
                );
            }
        }
        self.dispatch(VariableEditIntent::ApplyArgumentEdit {
            arguments,
            is_valid,
        })
    }

    /// Make `selection` the single default value.
    pub fn select_default(&mut self, selection: impl Into<String>) -> &VariableEditState {
        self.dispatch(VariableEditIntent::SelectDefault {
            selection: selection.into(),
        })
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Finalize the working copy and end the session.
    ///
    /// # Errors
    /// Refuses with [`EditError::UnvalidatedSubmit`] while the arguments are
    /// not valid, leaving the session as it was.
    pub fn submit(&mut self) -> Result<Variable, EditError> {
        let finalized = match &self.state {
            VariableEditState::Closed => return Err(EditError::NotEditing),
            VariableEditState::Editing {
                working,
                has_valid_args: false,
                ..
            } => {
                tracing::warn!(variable_id = %working.id, "Refusing to submit unvalidated arguments");
                return Err(EditError::UnvalidatedSubmit {
                    id: working.id.clone(),
                });
            }
            VariableEditState::Editing { working, .. } => working.clone(),
        };

        self.dispatch(VariableEditIntent::Close);
        tracing::info!(variable_id = %finalized.id, kind = %finalized.kind(), "Variable submitted");
        Ok(finalized)
    }

    /// Discard the working copy.
    pub fn close(&mut self) {
        if let Some(working) = self.working_variable() {
            tracing::info!(variable_id = %working.id, "Variable edit discarded");
        }
        self.dispatch(VariableEditIntent::Close);
    }

    fn dispatch(&mut self, intent: VariableEditIntent) -> &VariableEditState {
        let state = std::mem::take(&mut self.state);
        self.state = VariableEditReducer::reduce(state, intent);
        &self.state
    }
}
