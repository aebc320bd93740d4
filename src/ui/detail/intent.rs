use super::state::DetailAction;
use crate::model::User;
use crate::ui::mvi::Intent;
use crate::ui::worker::RequestId;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// A backend action was issued for this record.
    Started { request: RequestId, action: DetailAction },
    /// Result of a `Load`. `None` is a 404.
    Loaded { request: RequestId, user: Option<User> },
    /// Any other action finished; `Ok` carries the confirmation text.
    Finished { request: RequestId, outcome: Result<String, String> },
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
}

impl Intent for DetailIntent {}
