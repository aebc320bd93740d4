//! Screen addresses. The same paths are accepted on the command line.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::store::Provenance;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    RandomUsers,
    SavedUsers,
    /// `/user/:id`. `provenance` is set when the user was opened from a list
    /// and left empty when the route came from outside (CLI), in which case
    /// the store resolves it.
    User {
        id: String,
        provenance: Option<Provenance>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route '{0}'")]
    Unknown(String),

    #[error("route '/user/' needs a user id")]
    MissingUserId,
}

impl Route {
    pub fn list(provenance: Provenance) -> Self {
        match provenance {
            Provenance::Random => Route::RandomUsers,
            Provenance::Saved => Route::SavedUsers,
        }
    }

    pub fn user(id: impl Into<String>, provenance: Provenance) -> Self {
        Route::User {
            id: id.into(),
            provenance: Some(provenance),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::RandomUsers => "/random-users".to_string(),
            Route::SavedUsers => "/saved-users".to_string(),
            Route::User { id, .. } => format!("/user/{id}"),
        }
    }

    /// Parse a path such as `/saved-users` or `/user/42`.
    ///
    /// The leading slash is optional and one trailing slash is ignored.
    pub fn parse(input: &str) -> Result<Self, RouteError> {
        let trimmed = input.trim();
        let path = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let path = path.strip_suffix('/').unwrap_or(path);

        match path {
            "" => Ok(Route::Home),
            "random-users" => Ok(Route::RandomUsers),
            "saved-users" => Ok(Route::SavedUsers),
            "user" => Err(RouteError::MissingUserId),
            other => match other.strip_prefix("user/") {
                Some("") => Err(RouteError::MissingUserId),
                Some(id) if !id.contains('/') => Ok(Route::User {
                    id: id.to_string(),
                    provenance: None,
                }),
                _ => Err(RouteError::Unknown(input.to_string())),
            },
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
