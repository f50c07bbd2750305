use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Refresh,
    Dismiss,
    Up,
    Down,
    None,
}

pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && let KeyCode::Char('c') = key.code
    {
        return AppAction::Quit;
    }

    match key.code {
        KeyCode::Char('q') => AppAction::Quit,
        KeyCode::Char('r' | 'R') => AppAction::Refresh,
        KeyCode::Esc => AppAction::Dismiss,
        KeyCode::Up | KeyCode::Char('k') => AppAction::Up,
        KeyCode::Down | KeyCode::Char('j') => AppAction::Down,
        _ => AppAction::None,
    }
}
