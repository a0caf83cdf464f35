use crate::ui::mvi::UiState;
use crate::variable::{Variable, VariableKind};

/// State of the variable edit surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum VariableEditState {
    #[default]
    Closed,
    Editing {
        /// Session-local draft, detached from the source record.
        working: Variable,
        /// Always true while renaming is disabled in this flow.
        is_name_valid: bool,
        /// Last validity reported for `working.arguments`.
        has_valid_args: bool,
    },
}

impl UiState for VariableEditState {}

/// Validity of the arguments, tagged with the current kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStatus {
    Valid(VariableKind),
    Invalid(VariableKind),
}

impl VariableEditState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn working_variable(&self) -> Option<&Variable> {
        match self {
            Self::Closed => None,
            Self::Editing { working, .. } => Some(working),
        }
    }

    pub fn has_valid_args(&self) -> bool {
        matches!(
            self,
            Self::Editing {
                has_valid_args: true,
                ..
            }
        )
    }

    pub fn is_name_valid(&self) -> bool {
        matches!(
            self,
            Self::Editing {
                is_name_valid: true,
                ..
            }
        )
    }

    /// Submittability depends on argument validity alone.
    pub fn can_submit(&self) -> bool {
        self.has_valid_args()
    }

    pub fn status(&self) -> Option<EditStatus> {
        match self {
            Self::Closed => None,
            Self::Editing {
                working,
                has_valid_args: true,
                ..
            } => Some(EditStatus::Valid(working.kind())),
            Self::Editing { working, .. } => Some(EditStatus::Invalid(working.kind())),
        }
    }
}
