//! Single-user view: profile fields, name editing and save/update/delete.

mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::{DetailAction, DetailState, NameField, Notice, Pending};
