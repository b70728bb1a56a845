use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` transition function.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Run [`Reducer::reduce`] against a state stored behind `&mut`.
    fn dispatch(state: &mut Self::State, intent: Self::Intent) {
        *state = Self::reduce(std::mem::take(state), intent);
    }
}
