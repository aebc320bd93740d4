//! Durable mirror of the session lists.
//!
//! The file holds one record under the `user-storage` key:
//!
//! ```json
//! {"state": {"users": [...], "savedUsers": [...]}, "version": 0}
//! ```
//!
//! Loading/error status is never written.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::User;

/// Storage key; also the state file stem.
pub const STORAGE_KEY: &str = "user-storage";

const STATE_VERSION: u32 = 0;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to read state file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse state file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode session state for '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write state file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported state version {found} in '{path}'")]
    Version { path: PathBuf, found: u32 },
}

/// The two persisted lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default, rename = "savedUsers")]
    pub saved_users: Vec<User>,
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/userdeck/user-storage.json`, falling back to the current directory.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("userdeck").join(format!("{STORAGE_KEY}.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read persisted lists. A missing file is an empty state.
    pub fn load(&self) -> Result<PersistedState, PersistError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PersistedState::default()),
            Err(e) => {
                return Err(PersistError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let envelope: Envelope =
            serde_json::from_str(&content).map_err(|e| PersistError::Parse {
                path: self.path.clone(),
                source: e,
            })?;

        if envelope.version != STATE_VERSION {
            return Err(PersistError::Version {
                path: self.path.clone(),
                found: envelope.version,
            });
        }

        Ok(envelope.state)
    }

    /// Replace the file contents with `state`.
    ///
    /// Writes a sibling temp file and renames it over the target while holding
    /// an exclusive lock on `<file>.lock`.
    pub fn save(&self, state: &PersistedState) -> Result<(), PersistError> {
        let write_err = |source| PersistError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.sibling("lock"))
            .map_err(write_err)?;
        FileExt::lock_exclusive(&lock).map_err(write_err)?;

        let envelope = Envelope {
            state: state.clone(),
            version: STATE_VERSION,
        };
        let body = serde_json::to_vec(&envelope).map_err(|e| PersistError::Encode {
            path: self.path.clone(),
            source: e,
        })?;

        let tmp_path = self.sibling("tmp");
        let result = (|| {
            let mut tmp = File::create(&tmp_path)?;
            tmp.write_all(&body)?;
            tmp.sync_all()?;
            fs::rename(&tmp_path, &self.path)
        })();

        let _ = FileExt::unlock(&lock);
        result.map_err(write_err)
    }

    fn sibling(&self, extension: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".");
        name.push(extension);
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dob, Location, Name, Picture};
    use tempfile::TempDir;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            gender: "male".to_string(),
            name: Name::new("Mr", "Jon", "Smith"),
            location: Location::default(),
            email: "jon@example.com".to_string(),
            phone: "1".to_string(),
            picture: Picture::default(),
            dob: Dob::default(),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let file = StateFile::new(dir.path().join("user-storage.json"));
        assert_eq!(file.load().unwrap(), PersistedState::default());
    }

    #[test]
    fn save_then_load_keeps_both_lists() {
        let dir = TempDir::new().unwrap();
        let file = StateFile::new(dir.path().join("nested").join("user-storage.json"));
        let state = PersistedState {
            users: vec![user("r1")],
            saved_users: vec![user("s1"), user("s2")],
        };
        file.save(&state).unwrap();
        assert_eq!(file.load().unwrap(), state);
        assert!(!file.sibling("tmp").exists());
    }

    #[test]
    fn written_layout_uses_saved_users_key() {
        let dir = TempDir::new().unwrap();
        let file = StateFile::new(dir.path().join("user-storage.json"));
        file.save(&PersistedState {
            users: vec![],
            saved_users: vec![user("s1")],
        })
        .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(raw["version"], 0);
        assert_eq!(raw["state"]["savedUsers"][0]["id"], "s1");
        assert!(raw["state"]["users"].as_array().unwrap().is_empty());
        assert!(raw["state"].get("loading").is_none());
    }

    #[test]
    fn corrupt_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("user-storage.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            StateFile::new(path).load(),
            Err(PersistError::Parse { .. })
        ));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("user-storage.json");
        fs::write(&path, r#"{"state":{"users":[],"savedUsers":[]},"version":7}"#).unwrap();
        assert!(matches!(
            StateFile::new(path).load(),
            Err(PersistError::Version { found: 7, .. })
        ));
    }

    #[test]
    fn default_path_ends_with_storage_key() {
        assert!(StateFile::default_path().ends_with("userdeck/user-storage.json"));
    }

    #[test]
    fn encode_failure_is_not_reported_as_parse() {
        let source = serde_json::from_str::<u32>("x").unwrap_err();
        let err = PersistError::Encode {
            path: PathBuf::from("state.json"),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("Failed to encode session state"));
        assert!(!message.contains("parse"));
    }
}
