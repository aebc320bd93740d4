//! REST client for the user-directory backend.
//!
//! | Method | Path                 | Body returned            |
//! |--------|----------------------|--------------------------|
//! | GET    | `/api/random-users`  | generator records        |
//! | GET    | `/api/users`         | saved users              |
//! | GET    | `/api/users/:id`     | one saved user           |
//! | POST   | `/api/users`         | created user, 409 if dup |
//! | PATCH  | `/api/users/:id`     | updated user             |
//! | DELETE | `/api/users/:id`     | ack                      |

mod client;
mod error;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};

/// Base URL used when neither config, env nor CLI provide one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5001";
