/// Marker trait for intents.
///
/// Intents come from key presses mapped to control events, from the schema
/// validator, and from the submission worker.
pub trait Intent: Send + 'static {}
