use super::state::HomeAction;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HomeIntent {
    MoveUp,
    MoveDown,
    Select(HomeAction),
}

impl Intent for HomeIntent {}
