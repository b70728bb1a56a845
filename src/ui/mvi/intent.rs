/// Marker trait for the actions a reducer understands.
///
/// Intents come from two places: input routed to a component (keys, pointer
/// presses) and the component's consumer (open/close requests).
pub trait Intent: Send + 'static {}
