mod common;

use common::user;
use userdeck::model::Name;
use userdeck::store::{Provenance, UserRef};
use userdeck::ui::detail::{
    DetailAction, DetailIntent, DetailReducer, DetailState, NameField, Notice,
};
use userdeck::ui::mvi::Reducer;
use userdeck::ui::worker::RequestId;

fn random_state() -> DetailState {
    let jane = user("1", "Dr", "Jane", "Doe", "France");
    DetailState::for_user(UserRef::random("1"), &jane)
}

fn started(state: DetailState, id: u64, action: DetailAction) -> DetailState {
    DetailReducer::reduce(
        state,
        DetailIntent::Started {
            request: RequestId::new(id),
            action,
        },
    )
}

fn finished(state: DetailState, id: u64, outcome: Result<&str, &str>) -> DetailState {
    DetailReducer::reduce(
        state,
        DetailIntent::Finished {
            request: RequestId::new(id),
            outcome: outcome.map(str::to_string).map_err(str::to_string),
        },
    )
}

#[test]
fn edits_go_to_focused_field() {
    let state = random_state();
    assert_eq!(state.focus, NameField::Title);

    let state = DetailReducer::reduce(state, DetailIntent::FocusNext);
    let state = DetailReducer::reduce(state, DetailIntent::Backspace);
    let state = DetailReducer::reduce(state, DetailIntent::Input('a'));

    assert_eq!(state.focus, NameField::First);
    assert_eq!(state.name, Name::new("Dr", "Jana", "Doe"));
}

#[test]
fn focus_wraps_backwards() {
    let state = DetailReducer::reduce(random_state(), DetailIntent::FocusPrev);
    assert_eq!(state.focus, NameField::Last);
}

#[test]
fn save_allowed_once_until_finished() {
    let state = random_state();
    assert!(state.can_save(false));

    let state = started(state, 1, DetailAction::Save);
    assert!(state.is_saving());
    assert!(!state.can_save(false));

    let state = started(state, 2, DetailAction::Save);
    assert_eq!(state.pending.map(|p| p.request), Some(RequestId::new(1)));

    let state = finished(state, 1, Ok("User saved"));
    assert!(!state.is_busy());
    assert_eq!(state.notice, Some(Notice::Info("User saved".to_string())));
}

#[test]
fn saved_record_cannot_be_saved_again() {
    let state = random_state();
    assert!(!state.can_save(true));
    assert!(state.can_modify(true));
    assert!(!state.can_modify(false));
}

#[test]
fn failure_keeps_record_and_shows_error() {
    let state = started(random_state(), 4, DetailAction::Save);
    let state = finished(state, 4, Err("User already exists"));

    assert!(!state.not_found);
    assert_eq!(
        state.notice,
        Some(Notice::Error("User already exists".to_string()))
    );
    assert!(state.can_save(false));
}

#[test]
fn finish_for_other_request_is_ignored() {
    let state = started(random_state(), 5, DetailAction::Update);
    let state = finished(state, 6, Ok("User updated"));
    assert!(state.is_busy());
    assert!(state.notice.is_none());
}

#[test]
fn unresolved_user_loads_as_saved() {
    let state = started(DetailState::unresolved("7"), 1, DetailAction::Load);
    assert!(state.is_loading());

    let jon = user("7", "Mr", "Jon", "Smith", "Spain");
    let state = DetailReducer::reduce(
        state,
        DetailIntent::Loaded {
            request: RequestId::new(1),
            user: Some(jon),
        },
    );

    assert_eq!(state.target(), Some(UserRef::saved("7")));
    assert_eq!(state.name.first, "Jon");
    assert!(!state.not_found);
}

#[test]
fn unresolved_user_missing_on_backend() {
    let state = started(DetailState::unresolved("7"), 1, DetailAction::Load);
    let state = DetailReducer::reduce(
        state,
        DetailIntent::Loaded {
            request: RequestId::new(1),
            user: None,
        },
    );

    assert!(state.not_found);
    assert!(state.target().is_none());
    assert!(!state.can_save(false));
}

#[test]
fn failed_load_is_not_found() {
    let state = started(DetailState::unresolved("7"), 1, DetailAction::Load);
    let state = finished(state, 1, Err("503 Service Unavailable"));
    assert!(state.not_found);
}

#[test]
fn not_found_state_rejects_edits() {
    let state = DetailReducer::reduce(DetailState::missing("x"), DetailIntent::Input('a'));
    assert_eq!(state.name, Name::default());
}

#[test]
fn loading_state_rejects_edits() {
    let state = started(random_state(), 1, DetailAction::Load);
    let state = DetailReducer::reduce(state, DetailIntent::Input('!'));
    assert_eq!(state.name.title, "Dr");
}

#[test]
fn saved_target_keeps_provenance() {
    let jon = user("2", "Mr", "Jon", "Smith", "Spain");
    let state = DetailState::for_user(UserRef::saved("2"), &jon);
    assert_eq!(state.provenance, Some(Provenance::Saved));
}
