use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// `reduce` must be pure: `(State, Intent) -> State`. Intents that do not
/// apply to the current state return it unchanged.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
