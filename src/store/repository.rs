//! Provenance-tagged user repository.
//!
//! Random and saved users live in one container. An entry is addressed by
//! [`UserRef`] (provenance + id); ids are unique per provenance but the same
//! id may appear under both.

use std::fmt;

use crate::model::{Name, User};

/// Where a user record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Fetched from the generator, held only in local session state.
    Random,
    /// Persisted on the backend.
    Saved,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Random => write!(f, "random"),
            Provenance::Saved => write!(f, "saved"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserRef {
    pub provenance: Provenance,
    pub id: String,
}

impl UserRef {
    pub fn random(id: impl Into<String>) -> Self {
        Self {
            provenance: Provenance::Random,
            id: id.into(),
        }
    }

    pub fn saved(id: impl Into<String>) -> Self {
        Self {
            provenance: Provenance::Saved,
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    provenance: Provenance,
    user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRepository {
    entries: Vec<Entry>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the two persisted lists. Later duplicates within a list win.
    pub fn from_lists(random: Vec<User>, saved: Vec<User>) -> Self {
        let mut repo = Self::new();
        repo.replace(Provenance::Random, random);
        repo.replace(Provenance::Saved, saved);
        repo
    }

    /// Users of one provenance, in insertion order.
    pub fn list(&self, provenance: Provenance) -> Vec<User> {
        self.entries
            .iter()
            .filter(|entry| entry.provenance == provenance)
            .map(|entry| entry.user.clone())
            .collect()
    }

    pub fn len(&self, provenance: Provenance) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.provenance == provenance)
            .count()
    }

    pub fn is_empty(&self, provenance: Provenance) -> bool {
        !self
            .entries
            .iter()
            .any(|entry| entry.provenance == provenance)
    }

    pub fn get(&self, user_ref: &UserRef) -> Option<&User> {
        self.position(user_ref.provenance, &user_ref.id)
            .map(|idx| &self.entries[idx].user)
    }

    pub fn contains(&self, user_ref: &UserRef) -> bool {
        self.position(user_ref.provenance, &user_ref.id).is_some()
    }

    /// Look an id up across both provenances. The saved record wins.
    pub fn find(&self, id: &str) -> Option<UserRef> {
        [Provenance::Saved, Provenance::Random]
            .into_iter()
            .map(|provenance| UserRef {
                provenance,
                id: id.to_string(),
            })
            .find(|user_ref| self.contains(user_ref))
    }

    /// Replace every user of `provenance`, keeping the other provenance as is.
    pub fn replace(&mut self, provenance: Provenance, users: Vec<User>) {
        self.entries.retain(|entry| entry.provenance != provenance);
        for user in users {
            self.upsert(provenance, user);
        }
    }

    /// Insert `user`, replacing in place an entry with the same id.
    pub fn upsert(&mut self, provenance: Provenance, user: User) {
        match self.position(provenance, &user.id) {
            Some(idx) => self.entries[idx].user = user,
            None => self.entries.push(Entry { provenance, user }),
        }
    }

    /// Replace an existing entry. Returns false when no entry matches.
    pub fn replace_one(&mut self, provenance: Provenance, id: &str, user: User) -> bool {
        match self.position(provenance, id) {
            Some(idx) => {
                self.entries[idx].user = user;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, user_ref: &UserRef) -> Option<User> {
        self.position(user_ref.provenance, &user_ref.id)
            .map(|idx| self.entries.remove(idx).user)
    }

    pub fn set_name(&mut self, user_ref: &UserRef, name: Name) -> bool {
        match self.position(user_ref.provenance, &user_ref.id) {
            Some(idx) => {
                self.entries[idx].user.name = name;
                true
            }
            None => false,
        }
    }

    fn position(&self, provenance: Provenance, id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.provenance == provenance && entry.user.id == id)
    }
}
