//! Terminal UI: three screens (home, user list, user detail) driven by one
//! event loop. State changes go through per-screen reducers; backend work is
//! handed to the worker and comes back as completion events.

pub mod app;
pub mod detail;
pub mod events;
pub mod footer;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod list;
pub mod mvi;
pub mod render;
pub mod route;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod widgets;
pub mod worker;

pub use route::{Route, RouteError};
pub use runtime::{run, UiOptions};
