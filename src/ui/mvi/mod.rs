//! Model-View-Intent primitives for dialog state.
//!
//! ```text
//! key / pointer ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers are pure. Side effects such as registering key listeners happen
//! in the component around the dispatch call.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
