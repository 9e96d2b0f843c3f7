use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    TogglePause,
    /// Push the next value to every ticker now
    Advance,
    CycleDirection,
    ToggleStrategy,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char(' '), _) | (KeyCode::Char('p'), _) => Action::TogglePause,
        (KeyCode::Char('n'), _) | (KeyCode::Enter, _) => Action::Advance,
        (KeyCode::Char('d'), _) => Action::CycleDirection,
        (KeyCode::Char('s'), _) => Action::ToggleStrategy,
        _ => Action::None,
    }
}
