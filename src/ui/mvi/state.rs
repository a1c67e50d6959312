/// Marker trait for UI state.
///
/// `Default` is the freshly mounted state; `Clone` + `PartialEq` let callers
/// snapshot and compare transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
