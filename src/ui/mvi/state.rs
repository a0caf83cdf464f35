/// Marker trait for editing-surface state.
///
/// States are replaced wholesale on every transition, never patched, so
/// they must be cheap to clone and comparable. `Default` is the closed
/// surface.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
