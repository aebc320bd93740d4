use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::error::{Operation, StoreError};
use super::persist::{PersistedState, StateFile};
use super::repository::{Provenance, UserRef, UserRepository};
use crate::api::ApiClient;
use crate::model::{Name, User, UserPatch};

/// Result of [`SessionStore::fetch_random_users`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Random list already populated and the fetch was not forced.
    Cached,
    /// List replaced with this many users.
    Fetched(usize),
}

/// Session state shared between the UI and background tasks.
///
/// Owns the user repository, wraps backend calls, and mirrors both lists to
/// the state file after every change. Each remote operation returns its own
/// result; there is no shared loading or error flag.
#[derive(Clone)]
pub struct SessionStore {
    api: ApiClient,
    repo: Arc<RwLock<UserRepository>>,
    state_file: StateFile,
    /// Set by in-memory edits not yet written to the state file.
    dirty: Arc<AtomicBool>,
}

impl SessionStore {
    /// Open a store, rehydrating both lists from `state_file` before any fetch.
    ///
    /// An unreadable state file is logged and treated as empty.
    pub fn open(api: ApiClient, state_file: StateFile) -> Self {
        let persisted = match state_file.load() {
            Ok(state) => state,
            Err(err) => {
                warn!(error = %err, "Ignoring unreadable session state");
                PersistedState::default()
            }
        };
        info!(
            path = %state_file.path().display(),
            random = persisted.users.len(),
            saved = persisted.saved_users.len(),
            "Session state rehydrated"
        );

        let repo = UserRepository::from_lists(persisted.users, persisted.saved_users);
        Self {
            api,
            repo: Arc::new(RwLock::new(repo)),
            state_file,
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn backend_url(&self) -> &str {
        self.api.base_url()
    }

    pub fn random_users(&self) -> Vec<User> {
        self.repo.read().list(Provenance::Random)
    }

    pub fn saved_users(&self) -> Vec<User> {
        self.repo.read().list(Provenance::Saved)
    }

    pub fn users(&self, provenance: Provenance) -> Vec<User> {
        self.repo.read().list(provenance)
    }

    pub fn count(&self, provenance: Provenance) -> usize {
        self.repo.read().len(provenance)
    }

    pub fn get(&self, user_ref: &UserRef) -> Option<User> {
        self.repo.read().get(user_ref).cloned()
    }

    /// Locate an id in either list, preferring the saved record.
    pub fn find(&self, id: &str) -> Option<UserRef> {
        self.repo.read().find(id)
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.repo.read().contains(&UserRef::saved(id))
    }

    /// Fetch generated users unless some are already held and `force` is false.
    ///
    /// On failure the current random list is kept.
    pub async fn fetch_random_users(&self, force: bool) -> Result<FetchOutcome, StoreError> {
        let current = self.repo.read().len(Provenance::Random);
        if current > 0 && !force {
            debug!(current, "Random users cached, skipping fetch");
            return Ok(FetchOutcome::Cached);
        }

        let users = self
            .api
            .random_users()
            .await
            .map_err(|e| self.fail(Operation::FetchRandomUsers, e))?;
        let count = users.len();
        self.mutate(|repo| repo.replace(Provenance::Random, users));
        info!(count, force, "Random users fetched");
        Ok(FetchOutcome::Fetched(count))
    }

    /// Replace the saved list with the backend's collection.
    pub async fn fetch_saved_users(&self) -> Result<usize, StoreError> {
        let users = self
            .api
            .list_users()
            .await
            .map_err(|e| self.fail(Operation::FetchSavedUsers, e))?;
        let count = users.len();
        self.mutate(|repo| repo.replace(Provenance::Saved, users));
        info!(count, "Saved users fetched");
        Ok(count)
    }

    /// Fetch one saved user. A 404 is `Ok(None)`.
    ///
    /// A found record is also placed into the saved list.
    pub async fn fetch_user_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        match self.api.get_user(id).await {
            Ok(user) => {
                self.mutate(|repo| repo.upsert(Provenance::Saved, user.clone()));
                Ok(Some(user))
            }
            Err(e) if e.is_not_found() => {
                debug!(id, "Saved user not found");
                Ok(None)
            }
            Err(e) => Err(self.fail(Operation::FetchUser, e)),
        }
    }

    /// Persist `user` on the backend and record the canonical copy as saved.
    ///
    /// A duplicate is [`StoreError::AlreadyExists`] and leaves the list untouched.
    pub async fn save_user(&self, user: &User) -> Result<User, StoreError> {
        let created = self
            .api
            .create_user(user)
            .await
            .map_err(|e| self.fail(Operation::SaveUser, e))?;
        self.mutate(|repo| repo.upsert(Provenance::Saved, created.clone()));
        info!(id = %created.id, "User saved");
        Ok(created)
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), StoreError> {
        self.api
            .delete_user(id)
            .await
            .map_err(|e| self.fail(Operation::DeleteUser, e))?;
        self.mutate(|repo| repo.remove(&UserRef::saved(id)));
        info!(id, "User deleted");
        Ok(())
    }

    /// Send a partial update and swap in the returned record.
    pub async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User, StoreError> {
        let updated = self
            .api
            .update_user(id, patch)
            .await
            .map_err(|e| self.fail(Operation::UpdateUser, e))?;
        let replaced = self.mutate(|repo| repo.replace_one(Provenance::Saved, id, updated.clone()));
        if !replaced {
            debug!(id, "Updated user not held locally");
        }
        info!(id, "User updated");
        Ok(updated)
    }

    /// Rename a not-yet-saved user in place. No network call.
    ///
    /// The change is held in memory until the next [`flush`](Self::flush) or
    /// persisted mutation, so per-keystroke edits never touch the disk.
    /// Returns false when no random user has this id.
    pub fn update_random_user_name(&self, id: &str, name: Name) -> bool {
        let mut repo = self.repo.write();
        let renamed = repo.set_name(&UserRef::random(id), name);
        if renamed {
            self.dirty.store(true, Ordering::SeqCst);
        }
        renamed
    }

    /// Write pending in-memory edits to the state file.
    pub fn flush(&self) {
        if !self.dirty.swap(false, Ordering::SeqCst) {
            return;
        }
        let repo = self.repo.write();
        self.persist(&repo);
        debug!("Pending session edits flushed");
    }

    fn fail(&self, op: Operation, source: crate::api::ApiError) -> StoreError {
        let err = StoreError::api(op, source);
        warn!(%op, error = %err, "Store operation failed");
        err
    }

    /// Apply `f` and write the result to the state file under the same lock,
    /// so file writes happen in mutation order.
    fn mutate<R>(&self, f: impl FnOnce(&mut UserRepository) -> R) -> R {
        let mut repo = self.repo.write();
        let result = f(&mut repo);
        self.dirty.store(false, Ordering::SeqCst);
        self.persist(&repo);
        result
    }

    fn persist(&self, repo: &UserRepository) {
        let snapshot = PersistedState {
            users: repo.list(Provenance::Random),
            saved_users: repo.list(Provenance::Saved),
        };
        if let Err(err) = self.state_file.save(&snapshot) {
            warn!(error = %err, "Failed to persist session state");
        }
    }
}
