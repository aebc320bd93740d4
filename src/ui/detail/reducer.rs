use super::intent::DetailIntent;
use super::state::{DetailAction, DetailState, Notice, Pending};
use crate::store::Provenance;
use crate::ui::mvi::Reducer;
use crate::ui::worker::RequestId;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Started { request, action } => {
                // One operation at a time: a second submit is dropped.
                if state.pending.is_none() {
                    state.pending = Some(Pending { request, action });
                    state.notice = None;
                }
            }
            DetailIntent::Loaded { request, user } => {
                if take_pending(&mut state, request).is_none() {
                    return state;
                }
                match user {
                    Some(user) => {
                        state.provenance = Some(Provenance::Saved);
                        state.name = user.name;
                        state.not_found = false;
                    }
                    None => state.not_found = true,
                }
            }
            DetailIntent::Finished { request, outcome } => {
                let Some(action) = take_pending(&mut state, request) else {
                    return state;
                };
                match outcome {
                    Ok(message) => state.notice = Some(Notice::Info(message)),
                    Err(message) => {
                        if action == DetailAction::Load {
                            state.not_found = true;
                        }
                        state.notice = Some(Notice::Error(message));
                    }
                }
            }
            DetailIntent::FocusNext => state.focus = state.focus.next(),
            DetailIntent::FocusPrev => state.focus = state.focus.prev(),
            DetailIntent::Input(ch) => {
                if is_editable(&state) {
                    state.focused_value_mut().push(ch);
                }
            }
            DetailIntent::Backspace => {
                if is_editable(&state) {
                    state.focused_value_mut().pop();
                }
            }
        }
        state
    }
}

/// Clear `pending` if it belongs to `request`, returning its action.
fn take_pending(state: &mut DetailState, request: RequestId) -> Option<DetailAction> {
    match state.pending {
        Some(pending) if pending.request == request => {
            state.pending = None;
            Some(pending.action)
        }
        _ => None,
    }
}

fn is_editable(state: &DetailState) -> bool {
    state.provenance.is_some() && !state.not_found && !state.is_loading()
}
