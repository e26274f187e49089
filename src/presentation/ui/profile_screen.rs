//! Profile tab with links to the secondary screens.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::view::ViewContext;
use crate::domain::entities::Username;
use crate::domain::navigation::TabRoute;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::Hint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    None,
    Open(TabRoute),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Open(TabRoute, &'static str),
    Logout,
}

const ENTRIES: [Entry; 4] = [
    Entry::Open(TabRoute::ThemeSettings, "Ajustes de tema"),
    Entry::Open(TabRoute::Objetos, "Mis objetos"),
    Entry::Open(TabRoute::Proceso, "Simular proceso"),
    Entry::Logout,
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileScreen {
    selected: usize,
}

impl ProfileScreen {
    pub const HINTS: &'static [Hint] = &[("↑↓", "Mover"), ("Enter", "Abrir")];

    pub fn handle_key(&mut self, key: &KeyEvent) -> ProfileAction {
        if let Some(step) = EventHandler::focus_move(key) {
            self.selected = step.apply(self.selected, ENTRIES.len());
            return ProfileAction::None;
        }

        if key.code == KeyCode::Enter {
            return match ENTRIES[self.selected] {
                Entry::Open(route, _) => ProfileAction::Open(route),
                Entry::Logout => ProfileAction::Logout,
            };
        }
        ProfileAction::None
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, ctx: &ViewContext<'_>, username: &Username) {
        let theme = ctx.theme;
        let [header, menu] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);

        Paragraph::new(vec![
            Line::styled(username.to_string(), theme.title_style),
            Line::styled("Cliente de PupiStore", theme.dimmed_style),
        ])
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.dimmed_style))
        .render(header, buf);

        let lines: Vec<Line<'_>> = ENTRIES
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let label = match entry {
                    Entry::Open(_, label) => *label,
                    Entry::Logout => "Cerrar sesión",
                };
                let style = if index == self.selected {
                    theme.selection_style
                } else {
                    theme.base_style
                };
                Line::styled(format!("  {label}"), style)
            })
            .collect();
        Paragraph::new(lines).style(theme.base_style).render(menu, buf);
    }
}
