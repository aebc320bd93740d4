/// Something that happened to a screen: a key press translated into a
/// screen action, or a backend completion addressed to it.
pub trait Intent: Send + 'static {}
