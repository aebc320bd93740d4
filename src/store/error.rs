use std::fmt;

use thiserror::Error;

use crate::api::ApiError;

/// Store operations that reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchRandomUsers,
    FetchSavedUsers,
    FetchUser,
    SaveUser,
    DeleteUser,
    UpdateUser,
}

impl Operation {
    /// Message shown to the person when this operation fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::FetchRandomUsers => "Failed to fetch users",
            Operation::FetchSavedUsers => "Failed to fetch saved users",
            Operation::FetchUser => "Failed to fetch user",
            Operation::SaveUser => "Failed to save user",
            Operation::DeleteUser => "Failed to delete user",
            Operation::UpdateUser => "Failed to update user",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::FetchRandomUsers => "fetch_random_users",
            Operation::FetchSavedUsers => "fetch_saved_users",
            Operation::FetchUser => "fetch_user_by_id",
            Operation::SaveUser => "save_user",
            Operation::DeleteUser => "delete_user",
            Operation::UpdateUser => "update_user",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// Save rejected with 409: the backend already holds this id.
    #[error("User already exists")]
    AlreadyExists,

    #[error("{}: {source}", .op.failure_message())]
    Api {
        op: Operation,
        #[source]
        source: ApiError,
    },
}

impl StoreError {
    pub(crate) fn api(op: Operation, source: ApiError) -> Self {
        if op == Operation::SaveUser && source.is_conflict() {
            return StoreError::AlreadyExists;
        }
        StoreError::Api { op, source }
    }

    /// Short text for the status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            StoreError::AlreadyExists => "User already exists",
            StoreError::Api { op, .. } => op.failure_message(),
        }
    }
}
