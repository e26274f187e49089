//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Direction of a focus move between form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Next,
    Previous,
}

/// Key classification shared by the screens.
pub struct EventHandler;

impl EventHandler {
    /// Only presses (and repeats) reach the screens.
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind != KeyEventKind::Release
    }

    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        key.code == KeyCode::Enter
    }

    /// `Tab`/`Down` forward, `Shift+Tab`/`Up` backward.
    #[must_use]
    pub fn focus_move(key: &KeyEvent) -> Option<FocusMove> {
        match key.code {
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(FocusMove::Previous)
            }
            KeyCode::Tab | KeyCode::Down => Some(FocusMove::Next),
            KeyCode::BackTab | KeyCode::Up => Some(FocusMove::Previous),
            _ => None,
        }
    }

    /// Space or Enter on a focused toggle.
    #[must_use]
    pub fn is_activate_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
    }
}

impl FocusMove {
    /// Applies the move to a focus index over `len` items, wrapping around.
    #[must_use]
    pub const fn apply(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            Self::Next => (index + 1) % len,
            Self::Previous => (index + len - 1) % len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_release_filtered() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert!(!EventHandler::is_press(&release));
        assert!(EventHandler::is_press(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_focus_moves() {
        assert_eq!(
            EventHandler::focus_move(&make_key_event(KeyCode::Tab, KeyModifiers::NONE)),
            Some(FocusMove::Next)
        );
        assert_eq!(
            EventHandler::focus_move(&make_key_event(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(FocusMove::Previous)
        );
        assert_eq!(
            EventHandler::focus_move(&make_key_event(KeyCode::Char('a'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_focus_wraps() {
        assert_eq!(FocusMove::Next.apply(2, 3), 0);
        assert_eq!(FocusMove::Previous.apply(0, 3), 2);
        assert_eq!(FocusMove::Next.apply(0, 0), 0);
    }

    #[test]
    fn test_submit_event() {
        assert!(EventHandler::is_submit_event(&make_key_event(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_submit_event(&make_key_event(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }
}
