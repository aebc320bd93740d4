use crate::ui::mvi::UiState;

/// The two entries of the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeAction {
    /// Force a fresh batch of generated users and browse them.
    #[default]
    Fetch,
    /// Browse users saved on the backend.
    History,
}

impl HomeAction {
    pub const ALL: [HomeAction; 2] = [HomeAction::Fetch, HomeAction::History];

    pub fn label(&self) -> &'static str {
        match self {
            HomeAction::Fetch => "Fetch",
            HomeAction::History => "History",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            HomeAction::Fetch => "Load a new batch of random users",
            HomeAction::History => "Browse saved users",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    pub selected: HomeAction,
}

impl UiState for HomeState {}
