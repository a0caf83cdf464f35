/// Marker trait for intents.
///
/// An intent is one discrete event from the host or from an embedded
/// editor: a selection in a dropdown, an edited payload, a dismissal.
pub trait Intent: Send + 'static {}
