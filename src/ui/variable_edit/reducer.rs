//! Reducer for the variable edit session.

use crate::ui::mvi::Reducer;
use crate::variable::VariableArguments;

use super::intent::VariableEditIntent;
use super::state::VariableEditState;

/// Reducer for variable edit state transitions.
///
/// ```text
/// Initialize(src)        → Valid(src.kind)
/// ChangeKind(k)          → Invalid(k), arguments reset, selection cleared
/// ApplyArgumentEdit(p,v) → Valid(kind) if v else Invalid(kind)
/// ApplyArgumentEdit(p,_) → Invalid(kind), p dropped, when p is another kind
/// ```
pub struct VariableEditReducer;

impl Reducer for VariableEditReducer {
    type State = VariableEditState;
    type Intent = VariableEditIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            VariableEditIntent::Initialize { source } => VariableEditState::Editing {
                working: source,
                is_name_valid: true,
                has_valid_args: true,
            },

            VariableEditIntent::ChangeKind { kind } => match state {
                VariableEditState::Editing {
                    mut working,
                    is_name_valid,
                    ..
                } => {
                    working.arguments = VariableArguments::empty(kind);
                    working.selected = None;
                    // An empty payload is never submittable until the
                    // argument editor revalidates it.
                    VariableEditState::Editing {
                        working,
                        is_name_valid,
                        has_valid_args: false,
                    }
                }
                other => other,
            },

            VariableEditIntent::ApplyArgumentEdit {
                arguments,
                is_valid,
            } => match state {
                VariableEditState::Editing {
                    mut working,
                    is_name_valid,
                    ..
                } => {
                    // Argument edits never change kind. A foreign payload is
                    // dropped but still revokes submittability.
                    let has_valid_args = if working.kind() == arguments.kind() {
                        working.arguments = arguments;
                        is_valid
                    } else {
                        false
                    };
                    VariableEditState::Editing {
                        working,
                        is_name_valid,
                        has_valid_args,
                    }
                }
                other => other,
            },

            VariableEditIntent::SelectDefault { selection } => match state {
                VariableEditState::Editing {
                    mut working,
                    is_name_valid,
                    has_valid_args,
                } => {
                    working.selected = Some(vec![selection]);
                    VariableEditState::Editing {
                        working,
                        is_name_valid,
                        has_valid_args,
                    }
                }
                other => other,
            },

            VariableEditIntent::Close => VariableEditState::Closed,
        }
    }
}
