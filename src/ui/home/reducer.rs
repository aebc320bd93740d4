use super::intent::HomeIntent;
use super::state::{HomeAction, HomeState};
use crate::ui::mvi::Reducer;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let position = HomeAction::ALL
            .iter()
            .position(|action| *action == state.selected)
            .unwrap_or(0);
        let len = HomeAction::ALL.len();

        let selected = match intent {
            HomeIntent::MoveUp => HomeAction::ALL[(position + len - 1) % len],
            HomeIntent::MoveDown => HomeAction::ALL[(position + 1) % len],
            HomeIntent::Select(action) => action,
        };
        HomeState { selected }
    }
}
