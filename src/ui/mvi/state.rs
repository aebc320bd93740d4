/// Everything a screen needs to render, short of the store data it reads
/// at draw time.
///
/// `Default` lets `App` take the state out with `std::mem::take` while a
/// reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
