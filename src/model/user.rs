use serde::{Deserialize, Serialize};

/// A user profile as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub gender: String,
    pub name: Name,
    pub location: Location,
    pub email: String,
    pub phone: String,
    pub picture: Picture,
    pub dob: Dob,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Name {
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Street {
    pub number: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dob {
    /// ISO 8601 timestamp, e.g. `1984-03-02T10:11:12.000Z`.
    pub date: String,
    pub age: u32,
}

impl Name {
    pub fn new(title: impl Into<String>, first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            first: first.into(),
            last: last.into(),
        }
    }

    /// `"{title} {first} {last}"`, the string the name filter matches against.
    pub fn full(&self) -> String {
        format!("{} {} {}", self.title, self.first, self.last)
    }
}

impl User {
    pub fn full_name(&self) -> String {
        self.name.full()
    }

    /// Year parsed from the leading `YYYY` of `dob.date`.
    pub fn birth_year(&self) -> Option<i32> {
        let year = self.dob.date.get(..4)?;
        if !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        year.parse().ok()
    }
}

/// Login block of a generator record. Only the uuid is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Login {
    pub uuid: String,
}

/// A profile in the external generator format.
///
/// Carries every [`User`] field except `id`; identity lives in `login.uuid`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RandomUserRecord {
    pub login: Login,
    pub gender: String,
    pub name: Name,
    pub location: Location,
    pub email: String,
    pub phone: String,
    pub picture: Picture,
    pub dob: Dob,
}

impl From<RandomUserRecord> for User {
    fn from(record: RandomUserRecord) -> Self {
        Self {
            id: record.login.uuid,
            gender: record.gender,
            name: record.name,
            location: record.location,
            email: record.email,
            phone: record.phone,
            picture: record.picture,
            dob: record.dob,
        }
    }
}

/// Partial update sent with `PATCH /api/users/:id`. Unset fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<Picture>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<Dob>,
}

impl UserPatch {
    pub fn name(name: Name) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
