use crate::ui::mvi::Intent;
use crate::ui::worker::RequestId;

#[derive(Debug, Clone)]
pub enum ListIntent {
    /// A load was issued; show progress until its completion arrives.
    Load { request: RequestId },
    Loaded { request: RequestId },
    LoadFailed { request: RequestId, message: String },
    FocusNext,
    FocusPrev,
    /// Leave the filter inputs.
    FocusRows,
    Input(char),
    Backspace,
    ClearInput,
    MoveUp,
    MoveDown { visible: usize },
    /// Step the exact-match country selector. An empty choice means "all".
    CycleCountry { countries: Vec<String>, forward: bool },
}

impl Intent for ListIntent {}
