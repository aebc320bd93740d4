use crate::filter::{CountryMatch, UserFilter};
use crate::model::User;
use crate::store::Provenance;
use crate::ui::mvi::UiState;
use crate::ui::worker::RequestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFocus {
    #[default]
    Rows,
    Name,
    Country,
}

impl ListFocus {
    pub fn next(self) -> Self {
        match self {
            ListFocus::Rows => ListFocus::Name,
            ListFocus::Name => ListFocus::Country,
            ListFocus::Country => ListFocus::Rows,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ListFocus::Rows => ListFocus::Country,
            ListFocus::Name => ListFocus::Rows,
            ListFocus::Country => ListFocus::Name,
        }
    }
}

/// Status of the one load this view is waiting on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading(RequestId),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub mode: Provenance,
    pub filter: UserFilter,
    pub focus: ListFocus,
    /// Index into the filtered rows.
    pub selected: usize,
    pub status: LoadStatus,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(Provenance::Random, CountryMatch::default())
    }
}

impl UiState for ListState {}

impl ListState {
    pub fn new(mode: Provenance, country_match: CountryMatch) -> Self {
        Self {
            mode,
            filter: UserFilter::new(country_match),
            focus: ListFocus::default(),
            selected: 0,
            status: LoadStatus::Idle,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading(_))
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        match self.status {
            LoadStatus::Loading(request) => Some(request),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Rows after filtering, in list order.
    pub fn visible<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        self.filter.apply(users)
    }

    pub fn selected_user<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        let visible = self.visible(users);
        let index = self.selected.min(visible.len().checked_sub(1)?);
        visible.get(index).copied()
    }

    /// Text of the input that has focus, if any.
    pub fn focused_input(&self) -> Option<&str> {
        match self.focus {
            ListFocus::Rows => None,
            ListFocus::Name => Some(&self.filter.name),
            ListFocus::Country => Some(&self.filter.country),
        }
    }
}
