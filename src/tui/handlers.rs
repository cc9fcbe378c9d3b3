// File: src/tui/handlers.rs
// Maps keyboard input to TUI actions.
use crate::tui::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, months_per_row: i64) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveBy(-1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveBy(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveBy(-months_per_row)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveBy(months_per_row)),
        KeyCode::PageUp => Some(Action::MoveBy(-months_per_row * 5)),
        KeyCode::PageDown => Some(Action::MoveBy(months_per_row * 5)),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::First),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Last),
        KeyCode::Char('n') => Some(Action::Today),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_vertical_moves_a_full_row() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), 36),
            Some(Action::MoveBy(36))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Up), 36),
            Some(Action::MoveBy(-36))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Esc), 36), Some(Action::Quit));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), 36),
            Some(Action::Quit)
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), 36), None);
    }
}
