//! Session store: the state layer between the UI, the backend and the
//! persisted session file.
//!
//! ```text
//! UI command ──→ SessionStore ──→ ApiClient
//!                     │
//!                     ├──→ UserRepository (random + saved, by provenance)
//!                     └──→ StateFile (mirrored after every change)
//! ```

mod error;
mod persist;
mod repository;
mod session;

pub use error::{Operation, StoreError};
pub use persist::{PersistError, PersistedState, StateFile, STORAGE_KEY};
pub use repository::{Provenance, UserRef, UserRepository};
pub use session::{FetchOutcome, SessionStore};
