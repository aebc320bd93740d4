mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use state::{HomeAction, HomeState};
