//! Registration form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use tracing::{debug, info};

use super::view::{ViewContext, centered};
use crate::application::dto::{Gender, RegistrationRequest, Satisfaction};
use crate::application::use_cases::RegisterUseCase;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{Hint, TextInput, Toggle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Password,
    Gender,
    Notifications,
    Satisfaction,
    Terms,
    Submit,
}

impl Field {
    const ORDER: [Self; 7] = [
        Self::Name,
        Self::Password,
        Self::Gender,
        Self::Notifications,
        Self::Satisfaction,
        Self::Terms,
        Self::Submit,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationAction {
    None,
    /// Form accepted; continue to login.
    Submitted,
}

pub struct RegistrationScreen {
    name: TextInput,
    password: TextInput,
    gender: Gender,
    notifications: bool,
    satisfaction: Satisfaction,
    terms_accepted: bool,
    focus: usize,
    use_case: RegisterUseCase,
}

impl RegistrationScreen {
    pub const HINTS: &'static [Hint] = &[
        ("Tab", "Campo"),
        ("Espacio", "Marcar"),
        ("←→", "Ajustar"),
    ];

    #[must_use]
    pub fn new() -> Self {
        let mut name = TextInput::new(" Ingrese su nombre ");
        name.set_focused(true);

        Self {
            name,
            password: TextInput::new(" Ingrese su contraseña ").password(),
            gender: Gender::default(),
            notifications: false,
            satisfaction: Satisfaction::default(),
            terms_accepted: false,
            focus: 0,
            use_case: RegisterUseCase::new(),
        }
    }

    const fn field(&self) -> Field {
        Field::ORDER[self.focus]
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
        self.name.set_focused(self.field() == Field::Name);
        self.password.set_focused(self.field() == Field::Password);
    }

    /// Current form contents.
    #[must_use]
    pub fn request(&self) -> RegistrationRequest {
        RegistrationRequest {
            name: self.name.value().to_string(),
            password: self.password.value().to_string(),
            terms_accepted: self.terms_accepted,
            gender: self.gender,
            notifications: self.notifications,
            satisfaction: self.satisfaction,
        }
    }

    fn submit(&self) -> RegistrationAction {
        let request = self.request();
        match self.use_case.execute(&request) {
            Ok(()) => {
                info!(
                    gender = request.gender.label(),
                    notifications = request.notifications,
                    satisfaction = request.satisfaction.score(),
                    "Registration submitted"
                );
                RegistrationAction::Submitted
            }
            Err(e) => {
                debug!(reason = %e, "Registration submit ignored");
                RegistrationAction::None
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> RegistrationAction {
        let field = self.field();
        let is_text = matches!(field, Field::Name | Field::Password);

        if let Some(step) = EventHandler::focus_move(&key) {
            self.set_focus(step.apply(self.focus, Field::ORDER.len()));
            return RegistrationAction::None;
        }

        if EventHandler::is_submit_event(&key) {
            if field == Field::Submit {
                return self.submit();
            }
            if is_text {
                self.set_focus(self.focus + 1);
                return RegistrationAction::None;
            }
        }

        match (field, key.code) {
            (Field::Name, _) => {
                self.name.handle_key(&key);
            }
            (Field::Password, _) => {
                self.password.handle_key(&key);
            }
            (Field::Gender, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter) => {
                self.gender = self.gender.next();
            }
            (Field::Notifications, _) if EventHandler::is_activate_event(&key) => {
                self.notifications = !self.notifications;
            }
            (Field::Satisfaction, KeyCode::Left) => {
                self.satisfaction = self.satisfaction.decrease();
            }
            (Field::Satisfaction, KeyCode::Right) => {
                self.satisfaction = self.satisfaction.increase();
            }
            (Field::Terms, _) if EventHandler::is_activate_event(&key) => {
                self.terms_accepted = !self.terms_accepted;
            }
            _ => {}
        }
        RegistrationAction::None
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, ctx: &ViewContext<'_>) {
        let theme = ctx.theme;
        let content_area = centered(area, 56, 20);
        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.focus_style)
            .style(theme.base_style)
            .title(" Registro en PupiStore ");
        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [name, password, _, gender, notifications, satisfaction, terms, _, submit] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        self.name.render_themed(name, buf, theme);
        self.password.render_themed(password, buf, theme);

        let row_style = |field: Field| {
            if self.field() == field {
                theme.selection_style
            } else {
                theme.base_style
            }
        };

        Paragraph::new(Line::from(vec![
            Span::styled("Género: ", row_style(Field::Gender)),
            Span::styled(format!("< {} >", self.gender.label()), theme.focus_style),
        ]))
        .render(gender, buf);

        Toggle::new("Recibir notificaciones", self.notifications, theme)
            .focused(self.field() == Field::Notifications)
            .render(notifications, buf);

        let score = usize::from(self.satisfaction.score());
        Paragraph::new(Line::from(vec![
            Span::styled("Satisfacción: ", row_style(Field::Satisfaction)),
            Span::styled("★".repeat(score), theme.focus_style),
            Span::styled("☆".repeat(5 - score), theme.dimmed_style),
        ]))
        .render(satisfaction, buf);

        Toggle::new("Acepto los términos y condiciones", self.terms_accepted, theme)
            .focused(self.field() == Field::Terms)
            .render(terms, buf);

        let enabled = self.request().can_submit();
        let button_style = match (self.field() == Field::Submit, enabled) {
            (_, false) => theme.dimmed_style,
            (true, true) => theme.selection_style.add_modifier(Modifier::BOLD),
            (false, true) => theme.focus_style,
        };
        Paragraph::new(Line::styled("[ Enviar y Continuar ]", button_style))
            .centered()
            .render(submit, buf);
    }
}

impl Default for RegistrationScreen {
    fn default() -> Self {
        Self::new()
    }
}
