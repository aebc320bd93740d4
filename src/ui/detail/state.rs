use crate::model::{Name, User};
use crate::store::{Provenance, UserRef};
use crate::ui::mvi::UiState;
use crate::ui::worker::RequestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameField {
    #[default]
    Title,
    First,
    Last,
}

impl NameField {
    pub const ALL: [NameField; 3] = [NameField::Title, NameField::First, NameField::Last];

    pub fn next(self) -> Self {
        match self {
            NameField::Title => NameField::First,
            NameField::First => NameField::Last,
            NameField::Last => NameField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            NameField::Title => NameField::Last,
            NameField::First => NameField::Title,
            NameField::Last => NameField::First,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NameField::Title => "Title",
            NameField::First => "First name",
            NameField::Last => "Last name",
        }
    }

    pub fn value(self, name: &Name) -> &str {
        match self {
            NameField::Title => &name.title,
            NameField::First => &name.first,
            NameField::Last => &name.last,
        }
    }

    fn value_mut(self, name: &mut Name) -> &mut String {
        match self {
            NameField::Title => &mut name.title,
            NameField::First => &mut name.first,
            NameField::Last => &mut name.last,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Load,
    Save,
    Delete,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pending {
    pub request: RequestId,
    pub action: DetailAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub id: String,
    /// Which list the shown record lives in; `None` until resolved.
    pub provenance: Option<Provenance>,
    /// Edit buffer for the name fields.
    pub name: Name,
    pub focus: NameField,
    /// The one backend operation in flight. Further actions wait for it.
    pub pending: Option<Pending>,
    pub notice: Option<Notice>,
    pub not_found: bool,
}

impl UiState for DetailState {}

impl DetailState {
    /// State for a record the store already holds.
    pub fn for_user(user_ref: UserRef, user: &User) -> Self {
        Self {
            id: user_ref.id,
            provenance: Some(user_ref.provenance),
            name: user.name.clone(),
            ..Self::default()
        }
    }

    /// State for an id that is neither held nor being fetched.
    pub fn missing(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            not_found: true,
            ..Self::default()
        }
    }

    /// State for an id whose record must be fetched first.
    pub fn unresolved(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn target(&self) -> Option<UserRef> {
        self.provenance.map(|provenance| UserRef {
            provenance,
            id: self.id.clone(),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.pending, Some(Pending { action: DetailAction::Load, .. }))
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.pending, Some(Pending { action: DetailAction::Save, .. }))
    }

    /// Save is offered for records not yet on the backend and at most once
    /// at a time.
    pub fn can_save(&self, is_saved: bool) -> bool {
        !is_saved && !self.not_found && self.provenance.is_some() && !self.is_busy()
    }

    /// Delete and update only apply to saved records.
    pub fn can_modify(&self, is_saved: bool) -> bool {
        is_saved && !self.not_found && !self.is_busy()
    }

    pub(super) fn focused_value_mut(&mut self) -> &mut String {
        self.focus.value_mut(&mut self.name)
    }
}
