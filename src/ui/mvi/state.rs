/// Marker trait for reducer-owned state.
///
/// `Default` is the idle value a component starts in and returns to.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
