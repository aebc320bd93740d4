//! Bridge between the synchronous UI loop and async store operations.
//!
//! The UI pushes [`UiCommand`]s with `try_send`; the worker spawns one task
//! per command so a slow request never holds up the next one, and posts the
//! outcome back on the UI event channel tagged with the command's
//! [`RequestId`].

use std::fmt;
use std::sync::mpsc as std_mpsc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::model::{User, UserPatch};
use crate::store::{FetchOutcome, SessionStore, StoreError};
use crate::ui::events::AppEvent;

/// Capacity of the UI → worker queue.
pub const COMMAND_QUEUE_CAPACITY: usize = 32;

/// Correlates a command with its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    FetchRandomUsers { request: RequestId, force: bool },
    FetchSavedUsers { request: RequestId },
    FetchUser { request: RequestId, id: String },
    SaveUser { request: RequestId, user: User },
    DeleteUser { request: RequestId, id: String },
    UpdateUser { request: RequestId, id: String, patch: UserPatch },
}

impl UiCommand {
    pub fn request(&self) -> RequestId {
        match self {
            UiCommand::FetchRandomUsers { request, .. }
            | UiCommand::FetchSavedUsers { request }
            | UiCommand::FetchUser { request, .. }
            | UiCommand::SaveUser { request, .. }
            | UiCommand::DeleteUser { request, .. }
            | UiCommand::UpdateUser { request, .. } => *request,
        }
    }
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

#[derive(Debug)]
pub enum CommandResult {
    RandomUsers(Result<FetchOutcome, StoreError>),
    SavedUsers(Result<usize, StoreError>),
    User(Result<Option<User>, StoreError>),
    Saved(Result<User, StoreError>),
    Deleted(Result<(), StoreError>),
    Updated(Result<User, StoreError>),
}

#[derive(Debug)]
pub struct Completion {
    pub request: RequestId,
    pub result: CommandResult,
}

/// Run one command against the store.
pub async fn execute(store: &SessionStore, command: UiCommand) -> Completion {
    let request = command.request();
    let result = match command {
        UiCommand::FetchRandomUsers { force, .. } => {
            CommandResult::RandomUsers(store.fetch_random_users(force).await)
        }
        UiCommand::FetchSavedUsers { .. } => {
            CommandResult::SavedUsers(store.fetch_saved_users().await)
        }
        UiCommand::FetchUser { id, .. } => CommandResult::User(store.fetch_user_by_id(&id).await),
        UiCommand::SaveUser { user, .. } => CommandResult::Saved(store.save_user(&user).await),
        UiCommand::DeleteUser { id, .. } => CommandResult::Deleted(store.delete_user(&id).await),
        UiCommand::UpdateUser { id, patch, .. } => {
            CommandResult::Updated(store.update_user(&id, &patch).await)
        }
    };
    Completion { request, result }
}

/// Start the command loop on `runtime` and return the sending half.
///
/// The loop ends when every sender is dropped.
pub fn spawn_worker(
    runtime: &Handle,
    store: SessionStore,
    events: std_mpsc::Sender<AppEvent>,
) -> UiCommandSender {
    let (sender, mut receiver) = mpsc::channel::<UiCommand>(COMMAND_QUEUE_CAPACITY);

    runtime.spawn(async move {
        while let Some(command) = receiver.recv().await {
            tracing::debug!(request = %command.request(), ?command, "Worker: command received");
            let store = store.clone();
            let events = events.clone();
            tokio::spawn(async move {
                let completion = execute(&store, command).await;
                if events.send(AppEvent::Completed(completion)).is_err() {
                    tracing::trace!("Worker: completion dropped (UI loop gone)");
                }
            });
        }
        tracing::debug!("Worker: command channel closed");
    });

    sender
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_increase() {
        let first = RequestId::new(1);
        assert_eq!(first.next(), RequestId::new(2));
        assert!(first < first.next());
        assert_eq!(first.to_string(), "#1");
    }

    #[test]
    fn command_exposes_its_request() {
        let command = UiCommand::DeleteUser {
            request: RequestId::new(7),
            id: "u1".to_string(),
        };
        assert_eq!(command.request(), RequestId::new(7));
    }
}
