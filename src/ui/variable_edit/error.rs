use thiserror::Error;

/// Errors surfaced by a variable edit session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The seed lookup found no variable with this id.
    #[error("Variable '{id}' not found")]
    NotFound { id: String },

    /// Submit was attempted while the arguments are not known to be valid.
    #[error("Variable '{id}' has unvalidated arguments and cannot be submitted")]
    UnvalidatedSubmit { id: String },

    #[error("No variable is being edited")]
    NotEditing,
}
