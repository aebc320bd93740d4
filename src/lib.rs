pub mod api;
pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod store;
pub mod ui;
