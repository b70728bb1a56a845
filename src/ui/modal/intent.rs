use crate::ui::listeners::ListenerId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ModalIntent {
    /// Consumer flipped its flag on; the listener is already registered.
    Open { escape_listener: ListenerId },

    /// Consumer flipped its flag off.
    Close,

    /// Tab / Shift+Tab. With two focusable controls both directions swap.
    CycleFocus,

    /// Scroll the body by `delta` lines, clamped to `0..=max`.
    Scroll { delta: i32, max: u16 },
}

impl Intent for ModalIntent {}
