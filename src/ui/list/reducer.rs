use super::intent::ListIntent;
use super::state::{ListFocus, ListState, LoadStatus};
use crate::filter::CountryMatch;
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Load { request } => {
                state.status = LoadStatus::Loading(request);
            }
            ListIntent::Loaded { request } => {
                // Completions for a load we stopped waiting on are stale.
                if state.pending_request() == Some(request) {
                    state.status = LoadStatus::Idle;
                    state.selected = 0;
                }
            }
            ListIntent::LoadFailed { request, message } => {
                if state.pending_request() == Some(request) {
                    state.status = LoadStatus::Failed(message);
                }
            }
            ListIntent::FocusNext => state.focus = state.focus.next(),
            ListIntent::FocusPrev => state.focus = state.focus.prev(),
            ListIntent::FocusRows => state.focus = ListFocus::Rows,
            ListIntent::Input(ch) => {
                match state.focus {
                    ListFocus::Rows => return state,
                    ListFocus::Name => state.filter.name.push(ch),
                    ListFocus::Country => {
                        if state.filter.country_match == CountryMatch::Exact {
                            return state;
                        }
                        state.filter.country.push(ch);
                    }
                }
                state.selected = 0;
            }
            ListIntent::Backspace => {
                match state.focus {
                    ListFocus::Rows => return state,
                    ListFocus::Name => {
                        state.filter.name.pop();
                    }
                    ListFocus::Country => match state.filter.country_match {
                        CountryMatch::Substring => {
                            state.filter.country.pop();
                        }
                        // A selector value is all or nothing.
                        CountryMatch::Exact => state.filter.country.clear(),
                    },
                }
                state.selected = 0;
            }
            ListIntent::ClearInput => {
                match state.focus {
                    ListFocus::Rows => return state,
                    ListFocus::Name => state.filter.name.clear(),
                    ListFocus::Country => state.filter.country.clear(),
                }
                state.selected = 0;
            }
            ListIntent::MoveUp => {
                state.selected = state.selected.saturating_sub(1);
            }
            ListIntent::MoveDown { visible } => {
                let last = visible.saturating_sub(1);
                state.selected = (state.selected + 1).min(last);
            }
            ListIntent::CycleCountry { countries, forward } => {
                let mut options = Vec::with_capacity(countries.len() + 1);
                options.push(String::new());
                options.extend(countries);

                let current = options
                    .iter()
                    .position(|option| option.eq_ignore_ascii_case(&state.filter.country))
                    .unwrap_or(0);
                let len = options.len();
                let next = if forward {
                    (current + 1) % len
                } else {
                    (current + len - 1) % len
                };
                state.filter.country = std::mem::take(&mut options[next]);
                state.selected = 0;
            }
        }
        state
    }
}
