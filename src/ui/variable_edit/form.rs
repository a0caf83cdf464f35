//! View model for the edit form.

use serde::Serialize;

use crate::config::KindCatalog;
use crate::variable::{VariableArguments, VariableKind};

use super::state::VariableEditState;

/// Help text shown under the read-only name field.
pub const NAME_HELP_TEXT: &str =
    "To rename your variable use the rename button. Renaming is not allowed here.";

/// One entry of the kind selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindOption {
    pub kind: VariableKind,
    pub label: String,
    pub selected: bool,
}

/// Everything a host needs to render the edit form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableEditForm {
    pub name: String,
    pub name_editable: bool,
    pub name_help: &'static str,
    pub kind_label: String,
    pub kind_options: Vec<KindOption>,
    pub arguments: VariableArguments,
    pub selected: Option<Vec<String>>,
    pub submit_enabled: bool,
}

impl VariableEditForm {
    /// Returns `None` for a closed session.
    pub fn from_state(state: &VariableEditState, catalog: &KindCatalog) -> Option<Self> {
        let working = state.working_variable()?;
        let current = working.kind();

        let kind_options = catalog
            .entries()
            .map(|(kind, label)| KindOption {
                kind,
                label: label.to_string(),
                selected: kind == current,
            })
            .collect();

        Some(Self {
            name: working.name.clone(),
            name_editable: false,
            name_help: NAME_HELP_TEXT,
            kind_label: catalog.label(current).to_string(),
            kind_options,
            arguments: working.arguments.clone(),
            selected: working.selected.clone(),
            submit_enabled: state.can_submit(),
        })
    }
}
