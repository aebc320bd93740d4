//! Shared fixtures: sample users, a store wired to a temp state file, and
//! the mock backend.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;
use userdeck::api::ApiClient;
use userdeck::model::{Dob, Location, Name, Picture, Street, User};
use userdeck::store::{PersistedState, SessionStore, StateFile};

pub use mock_backend::{CapturedRequest, MockBackend, MockResponse};

/// Base URL nothing listens on, for tests that must not reach a backend.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

pub fn user(id: &str, title: &str, first: &str, last: &str, country: &str) -> User {
    User {
        id: id.to_string(),
        gender: "female".to_string(),
        name: Name::new(title, first, last),
        location: Location {
            street: Street {
                number: 7,
                name: "Main Street".to_string(),
            },
            city: "Springfield".to_string(),
            state: "Oregon".to_string(),
            country: country.to_string(),
        },
        email: format!("{}@example.com", first.to_lowercase()),
        phone: "555-0100".to_string(),
        picture: Picture {
            large: format!("https://pics.example.com/{id}.jpg"),
            ..Picture::default()
        },
        dob: Dob {
            date: "1988-02-03T04:05:06.000Z".to_string(),
            age: 38,
        },
    }
}

/// `Dr Jane Doe` from France and `Mr Jon Smith` from Spain.
pub fn jane_and_jon() -> Vec<User> {
    vec![
        user("1", "Dr", "Jane", "Doe", "France"),
        user("2", "Mr", "Jon", "Smith", "Spain"),
    ]
}

/// A profile in generator format, as served by `/api/random-users`.
pub fn random_record(uuid: &str, first: &str, country: &str) -> serde_json::Value {
    json!({
        "gender": "male",
        "name": {"title": "Mr", "first": first, "last": "Tester"},
        "location": {
            "street": {"number": 1, "name": "High Street"},
            "city": "Leeds",
            "state": "Yorkshire",
            "country": country,
            "postcode": "LS1"
        },
        "email": format!("{}@example.com", first.to_lowercase()),
        "login": {"uuid": uuid, "username": "tester"},
        "dob": {"date": "1970-01-01T00:00:00.000Z", "age": 56},
        "phone": "555-0199",
        "picture": {"large": "l.jpg", "medium": "m.jpg", "thumbnail": "t.jpg"},
        "nat": "GB"
    })
}

pub fn user_value(user: &User) -> serde_json::Value {
    serde_json::to_value(user).expect("user serializes")
}

/// A store backed by a state file inside its own temp dir.
pub struct TestStore {
    pub store: SessionStore,
    pub state_path: PathBuf,
    pub dir: TempDir,
}

impl TestStore {
    pub fn open(base_url: &str) -> Self {
        Self::with_state(base_url, None)
    }

    /// Write `state` to the state file first, then open the store on it.
    pub fn with_state(base_url: &str, state: Option<PersistedState>) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let state_path = dir.path().join("user-storage.json");
        let state_file = StateFile::new(&state_path);
        if let Some(state) = state {
            state_file.save(&state).expect("Failed to seed state file");
        }
        let api = ApiClient::new(base_url, None).expect("Failed to build client");
        Self {
            store: SessionStore::open(api, state_file),
            state_path,
            dir,
        }
    }

    /// Open a second store on the same state file, as a restart would.
    pub fn reopen(&self, base_url: &str) -> SessionStore {
        let api = ApiClient::new(base_url, None).expect("Failed to build client");
        SessionStore::open(api, StateFile::new(&self.state_path))
    }

    pub fn persisted(&self) -> PersistedState {
        StateFile::new(&self.state_path)
            .load()
            .expect("state file readable")
    }
}
