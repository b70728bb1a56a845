use crate::ui::mvi::Reducer;

use super::intent::ModalIntent;
use super::state::{ModalFocus, ModalState};

/// Reducer for a single dialog instance.
///
/// Listener bookkeeping is done by [`super::Modal`] around the dispatch.
pub struct ModalReducer;

impl Reducer for ModalReducer {
    type State = ModalState;
    type Intent = ModalIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ModalIntent::Open { escape_listener } => match state {
                ModalState::Closed => ModalState::Open {
                    focus: ModalFocus::CloseButton,
                    scroll: 0,
                    escape_listener,
                },
                open => open,
            },

            ModalIntent::Close => ModalState::Closed,

            ModalIntent::CycleFocus => match state {
                ModalState::Open {
                    focus,
                    scroll,
                    escape_listener,
                } => ModalState::Open {
                    focus: focus.toggled(),
                    scroll,
                    escape_listener,
                },
                closed => closed,
            },

            ModalIntent::Scroll { delta, max } => match state {
                ModalState::Open {
                    focus: ModalFocus::Body,
                    scroll,
                    escape_listener,
                } => ModalState::Open {
                    focus: ModalFocus::Body,
                    scroll: (i32::from(scroll) + delta).clamp(0, i32::from(max)) as u16,
                    escape_listener,
                },
                other => other,
            },
        }
    }
}
