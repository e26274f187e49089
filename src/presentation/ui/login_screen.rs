//! Login screen.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use tracing::debug;

use super::view::{ViewContext, centered};
use crate::application::dto::LoginRequest;
use crate::application::use_cases::LoginUseCase;
use crate::domain::entities::Session;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{Hint, TextInput};

const FIELD_COUNT: usize = 4;
const SUBMIT: usize = 2;
const REGISTER_LINK: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    None,
    /// Credentials accepted; the session travels with the home route.
    LoggedIn(Session),
    /// The "create account" link.
    OpenRegistration,
}

/// Login screen UI.
pub struct LoginScreen {
    username: TextInput,
    password: TextInput,
    focus: usize,
    use_case: LoginUseCase,
}

impl LoginScreen {
    pub const HINTS: &'static [Hint] = &[("Tab", "Campo"), ("Enter", "Ingresar")];

    /// Creates new login screen.
    #[must_use]
    pub fn new() -> Self {
        let mut username = TextInput::new(" Usuario ");
        username.set_focused(true);

        Self {
            username,
            password: TextInput::new(" Contraseña ").password(),
            focus: 0,
            use_case: LoginUseCase::new(),
        }
    }

    fn request(&self) -> LoginRequest {
        LoginRequest::new(self.username.value(), self.password.value())
    }

    /// Whether the submit action is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.request().can_submit()
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
        self.username.set_focused(focus == 0);
        self.password.set_focused(focus == 1);
    }

    fn submit(&self) -> LoginAction {
        match self.use_case.execute(self.request()) {
            Ok(response) => LoginAction::LoggedIn(response.session),
            Err(e) => {
                debug!(reason = %e, "Login submit ignored");
                LoginAction::None
            }
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if let Some(step) = EventHandler::focus_move(&key) {
            self.set_focus(step.apply(self.focus, FIELD_COUNT));
            return LoginAction::None;
        }

        if EventHandler::is_submit_event(&key) {
            return match self.focus {
                REGISTER_LINK => LoginAction::OpenRegistration,
                _ => self.submit(),
            };
        }

        match self.focus {
            0 => {
                self.username.handle_key(&key);
            }
            1 => {
                self.password.handle_key(&key);
            }
            _ => {}
        }
        LoginAction::None
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, ctx: &ViewContext<'_>) {
        let theme = ctx.theme;
        let content_area = centered(area, 50, 16);
        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.focus_style)
            .style(theme.base_style)
            .title(" PupiStore - Iniciar Sesión ");
        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [welcome, _, user, pass, _, submit, link] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new("Bienvenido a PupiStore 🐱")
            .style(theme.title_style)
            .centered()
            .render(welcome, buf);
        self.username.render_themed(user, buf, theme);
        self.password.render_themed(pass, buf, theme);

        let button_style = match (self.focus == SUBMIT, self.can_submit()) {
            (_, false) => theme.dimmed_style,
            (true, true) => theme.selection_style.add_modifier(Modifier::BOLD),
            (false, true) => theme.focus_style,
        };
        Paragraph::new(Line::styled("[ Ingresar ]", button_style))
            .centered()
            .render(submit, buf);

        let link_style = if self.focus == REGISTER_LINK {
            theme.selection_style
        } else {
            theme.dimmed_style.add_modifier(Modifier::UNDERLINED)
        };
        Paragraph::new(Line::styled("¿No tienes cuenta? Regístrate", link_style))
            .centered()
            .render(link, buf);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_initial_state() {
        let screen = LoginScreen::new();
        assert!(!screen.can_submit());
        assert!(screen.username.is_focused());
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "ana");

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::None);

        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "   ");
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::None);
    }

    #[test]
    fn test_submit_keeps_username_verbatim() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "José Ñ/ü");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "x");

        let LoginAction::LoggedIn(session) = screen.handle_key(key(KeyCode::Enter)) else {
            panic!("expected login");
        };
        assert_eq!(session.username().as_str(), "José Ñ/ü");
    }

    #[test]
    fn test_register_link() {
        let mut screen = LoginScreen::new();
        screen.handle_key(key(KeyCode::Up));

        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            LoginAction::OpenRegistration
        );
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "a");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "b");

        assert_eq!(screen.username.value(), "a");
        assert_eq!(screen.password.value(), "b");
    }
}
