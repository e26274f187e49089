//! Catalog tab.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::view::ViewContext;
use crate::domain::entities::CATALOG;
use crate::presentation::widgets::Hint;

const PAGE: usize = 5;

/// Scroll position over the fixed catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductList {
    selected: usize,
}

impl ProductList {
    pub const HINTS: &'static [Hint] = &[("↑↓", "Mover"), ("PgUp/PgDn", "Página")];

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the selection. Returns whether the key was used.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let last = CATALOG.len() - 1;
        self.selected = match key.code {
            KeyCode::Down => (self.selected + 1).min(last),
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::PageDown => (self.selected + PAGE).min(last),
            KeyCode::PageUp => self.selected.saturating_sub(PAGE),
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => return false,
        };
        true
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, ctx: &ViewContext<'_>) {
        let theme = ctx.theme;
        let [header, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(area);

        Paragraph::new(vec![
            Line::styled("Tiendita de Pupi 🐱", theme.title_style),
            Line::styled("Productos recomendados para tu gatito", theme.dimmed_style),
        ])
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.dimmed_style))
        .render(header, buf);

        let items: Vec<ListItem<'_>> = CATALOG
            .iter()
            .map(|item| {
                ListItem::new(Text::from(vec![
                    Line::from(vec![
                        Span::styled(item.name, theme.base_style),
                        Span::raw("  "),
                        Span::styled(item.price.to_string(), theme.price_style),
                    ]),
                    Line::styled(item.description, theme.dimmed_style),
                    Line::raw(""),
                ]))
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(
            List::new(items)
                .style(theme.base_style)
                .highlight_style(theme.selection_style)
                .highlight_symbol("▌ "),
            list_area,
            buf,
            &mut state,
        );
    }
}
