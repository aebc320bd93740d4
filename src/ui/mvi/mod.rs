//! Unidirectional state primitives shared by every screen.
//!
//! ```text
//! key / completion ──→ Intent ──→ Reducer ──→ State ──→ render
//!        ↑                                               │
//!        └───────────────────────────────────────────────┘
//! ```
//!
//! Screens keep their state in plain values. Side effects (issuing backend
//! commands, touching the session store) happen in `App` around a dispatch,
//! never inside a reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
