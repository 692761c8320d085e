use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Press(Key),
    Release(Key),
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if let Some(direction) = Self::direction_key(key.code) {
            return match key.kind {
                KeyEventKind::Release => KeyAction::Release(direction),
                KeyEventKind::Press | KeyEventKind::Repeat => KeyAction::Press(direction),
            };
        }

        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            _ => KeyAction::None,
        }
    }

    /// Arrow keys and WASD both steer
    fn direction_key(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::ArrowUp),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::ArrowDown),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::ArrowLeft),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::ArrowRight),
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind_and_state(code, KeyModifiers::NONE, kind, KeyEventState::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        let cases = [
            (KeyCode::Up, Key::ArrowUp),
            (KeyCode::Down, Key::ArrowDown),
            (KeyCode::Left, Key::ArrowLeft),
            (KeyCode::Right, Key::ArrowRight),
        ];
        for (code, key) in cases {
            let event = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(handler.handle_key_event(event), KeyAction::Press(key));
        }
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        let w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(w), KeyAction::Press(Key::ArrowUp));

        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(a), KeyAction::Press(Key::ArrowLeft));

        let s = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(s), KeyAction::Press(Key::ArrowDown));

        let d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(d), KeyAction::Press(Key::ArrowRight));
    }

    #[test]
    fn test_repeat_and_release() {
        let handler = InputHandler::new();

        let repeat = with_kind(KeyCode::Left, KeyEventKind::Repeat);
        assert_eq!(handler.handle_key_event(repeat), KeyAction::Press(Key::ArrowLeft));

        let release = with_kind(KeyCode::Left, KeyEventKind::Release);
        assert_eq!(handler.handle_key_event(release), KeyAction::Release(Key::ArrowLeft));
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(q), KeyAction::Quit);

        let q_upper = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(q_upper), KeyAction::Quit);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(esc), KeyAction::Quit);
    }

    #[test]
    fn test_restart_key() {
        let handler = InputHandler::new();

        let r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(r), KeyAction::Restart);

        // only the press restarts
        let r_up = with_kind(KeyCode::Char('r'), KeyEventKind::Release);
        assert_eq!(handler.handle_key_event(r_up), KeyAction::None);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(x), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }
}
