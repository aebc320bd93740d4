use thiserror::Error;

/// Errors returned by [`ApiClient`](super::ApiClient) calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response (connect, timeout, body transfer).
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend rejected a create because the record already exists (409).
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Backend has no record at this path (404).
    #[error("Not found: {path}")]
    NotFound { path: String },

    /// Any other non-success status.
    #[error("Backend error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Client could not be constructed.
    #[error("Invalid client setup: {0}")]
    Setup(String),
}

impl ApiError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// HTTP status attached to the error, when the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Conflict { .. } => Some(409),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
