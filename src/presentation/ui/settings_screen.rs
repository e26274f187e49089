//! Theme settings, bound to the dark mode preference.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Paragraph, Widget},
};

use super::view::ViewContext;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{Hint, Toggle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    None,
    SetDarkMode(bool),
}

/// Stateless: the toggle reflects the last published preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsScreen;

impl SettingsScreen {
    pub const HINTS: &'static [Hint] = &[("Espacio", "Cambiar")];

    #[must_use]
    pub fn handle_key(self, key: &KeyEvent, dark_mode: bool) -> SettingsAction {
        if EventHandler::is_activate_event(key) {
            SettingsAction::SetDarkMode(!dark_mode)
        } else {
            SettingsAction::None
        }
    }

    pub fn render(self, area: Rect, buf: &mut Buffer, ctx: &ViewContext<'_>) {
        let theme: &Theme = ctx.theme;
        let [title, _, toggle] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new("Apariencia")
            .style(theme.title_style)
            .render(title, buf);
        Toggle::new("Tema oscuro", ctx.dark_mode, theme)
            .focused(true)
            .render(toggle, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_toggle_flips_current_value() {
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);

        assert_eq!(
            SettingsScreen.handle_key(&space, false),
            SettingsAction::SetDarkMode(true)
        );
        assert_eq!(
            SettingsScreen.handle_key(&space, true),
            SettingsAction::SetDarkMode(false)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        let key = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(SettingsScreen.handle_key(&key, false), SettingsAction::None);
    }
}
