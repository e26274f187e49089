use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::view::ViewContext;
use crate::application::services::ProcessState;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::Hint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessAction {
    None,
    Press,
}

/// View over the shared process simulator; holds no state of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessScreen;

impl ProcessScreen {
    pub const HINTS: &'static [Hint] = &[("Enter", "Botón")];

    #[must_use]
    pub fn handle_key(self, key: &KeyEvent) -> ProcessAction {
        if EventHandler::is_activate_event(key) {
            ProcessAction::Press
        } else {
            ProcessAction::None
        }
    }

    const fn button_label(state: ProcessState) -> &'static str {
        match state {
            ProcessState::Idle => "[ Iniciar proceso ]",
            ProcessState::Processing => "[ Procesando... ]",
            ProcessState::Completed => "[ Reiniciar ]",
        }
    }

    pub fn render(self, area: Rect, buf: &mut Buffer, ctx: &ViewContext<'_>) {
        let theme = ctx.theme;
        let [title, _, status, _, button] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new("Simulación de proceso")
            .style(theme.title_style)
            .render(title, buf);

        let status_style = match ctx.process {
            ProcessState::Idle => theme.dimmed_style,
            ProcessState::Processing => theme.focus_style.add_modifier(Modifier::ITALIC),
            ProcessState::Completed => theme.price_style.add_modifier(Modifier::BOLD),
        };
        Paragraph::new(Line::styled(
            format!("Estado: {}", ctx.process.label()),
            status_style,
        ))
        .render(status, buf);

        let button_style = if ctx.process == ProcessState::Processing {
            theme.dimmed_style
        } else {
            theme.selection_style
        };
        Paragraph::new(Line::styled(Self::button_label(ctx.process), button_style))
            .render(button, buf);
    }
}
