//! Reusable overlay dialog.
//!
//! A [`Modal`] never opens or closes on its own. The consumer owns a boolean
//! and calls [`Modal::sync`] with it; input handed to the modal yields a
//! [`ModalResponse`], and `CloseRequested` is the consumer's cue to run its
//! on-close callback and sync again.
//!
//! - `state.rs` - Closed / Open state
//! - `intent.rs` - transitions requested by input or the consumer
//! - `reducer.rs` - pure transitions
//! - `dialog.rs` - layout, hit-testing and rendering

mod dialog;
mod intent;
mod reducer;
mod state;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::ui::listeners::{KeyListeners, ListenerId};
use crate::ui::mvi::Reducer;

pub use dialog::{render_modal, ModalLayout};
pub use intent::ModalIntent;
pub use reducer::ModalReducer;
pub use state::{ModalFocus, ModalState};

/// Element a pointer press landed on while a dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The overlay itself, outside the dialog region.
    Backdrop,
    /// Anywhere inside the dialog other than the close control.
    Dialog,
    CloseButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalResponse {
    /// The modal is closed and did not look at the input.
    Ignored,
    /// Handled (or swallowed) by the open modal.
    Consumed,
    /// The user asked to dismiss the dialog.
    CloseRequested,
}

#[derive(Debug)]
pub struct Modal {
    title: &'static str,
    state: ModalState,
}

impl Modal {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            state: ModalState::default(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Bring the modal in line with the consumer's `open` flag.
    ///
    /// Opening registers an Escape listener and focuses the close control;
    /// closing deregisters the listener before the state is dropped.
    pub fn sync(&mut self, open: bool, listeners: &mut KeyListeners) {
        match (open, self.state.is_open()) {
            (true, false) => {
                let escape_listener = listeners.register(KeyCode::Esc);
                self.dispatch(ModalIntent::Open { escape_listener });
                debug!(dialog = self.title, "dialog opened");
            }
            (false, true) => {
                if let Some(id) = self.state.escape_listener() {
                    listeners.unregister(id);
                }
                self.dispatch(ModalIntent::Close);
                debug!(dialog = self.title, "dialog closed");
            }
            _ => {}
        }
    }

    pub fn owns_listener(&self, id: ListenerId) -> bool {
        self.state.escape_listener() == Some(id)
    }

    /// Keys other than Escape (which arrives through the listener registry).
    ///
    /// An open modal swallows every key so nothing reaches the screen
    /// underneath it.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        layout: &ModalLayout,
        content_lines: usize,
    ) -> ModalResponse {
        let Some(focus) = self.state.focus() else {
            return ModalResponse::Ignored;
        };
        if key.kind != KeyEventKind::Press {
            return ModalResponse::Consumed;
        }

        let max = layout.max_scroll(content_lines);
        let page = i32::from(layout.page());
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') if focus == ModalFocus::CloseButton => {
                return ModalResponse::CloseRequested;
            }
            KeyCode::Tab | KeyCode::BackTab => self.dispatch(ModalIntent::CycleFocus),
            KeyCode::Up => self.dispatch(ModalIntent::Scroll { delta: -1, max }),
            KeyCode::Down => self.dispatch(ModalIntent::Scroll { delta: 1, max }),
            KeyCode::PageUp => self.dispatch(ModalIntent::Scroll { delta: -page, max }),
            KeyCode::PageDown => self.dispatch(ModalIntent::Scroll { delta: page, max }),
            KeyCode::Home => self.dispatch(ModalIntent::Scroll {
                delta: -i32::from(max),
                max,
            }),
            KeyCode::End => self.dispatch(ModalIntent::Scroll {
                delta: i32::from(max),
                max,
            }),
            _ => {}
        }
        ModalResponse::Consumed
    }

    /// A pointer press, already resolved to the element under it.
    pub fn handle_pointer(&self, target: PointerTarget) -> ModalResponse {
        if !self.is_open() {
            return ModalResponse::Ignored;
        }
        match target {
            PointerTarget::Backdrop | PointerTarget::CloseButton => ModalResponse::CloseRequested,
            PointerTarget::Dialog => ModalResponse::Consumed,
        }
    }

    fn dispatch(&mut self, intent: ModalIntent) {
        ModalReducer::dispatch(&mut self.state, intent);
    }
}
