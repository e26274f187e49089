//! Record form and the live record list.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::view::ViewContext;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{Hint, TextInput};

const FIELD_COUNT: usize = 3;
const SAVE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectsAction {
    None,
    Save { name: String, description: String },
}

#[derive(Debug, Clone)]
pub struct ObjectsScreen {
    name: TextInput,
    description: TextInput,
    focus: usize,
    scroll: usize,
}

impl ObjectsScreen {
    pub const HINTS: &'static [Hint] = &[
        ("Tab", "Campo"),
        ("Enter", "Guardar"),
        ("PgUp/PgDn", "Lista"),
    ];

    #[must_use]
    pub fn new() -> Self {
        let mut name = TextInput::new(" Nombre ");
        name.set_focused(true);

        Self {
            name,
            description: TextInput::new(" Descripción "),
            focus: 0,
            scroll: 0,
        }
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
        self.name.set_focused(focus == 0);
        self.description.set_focused(focus == 1);
    }

    /// Blank names are ignored here; the fields clear once a save is dispatched.
    fn save(&mut self) -> ObjectsAction {
        if self.name.value().trim().is_empty() {
            return ObjectsAction::None;
        }

        let action = ObjectsAction::Save {
            name: self.name.value().to_string(),
            description: self.description.value().to_string(),
        };
        self.name.clear();
        self.description.clear();
        self.set_focus(0);
        action
    }

    pub fn handle_key(&mut self, key: &KeyEvent, record_count: usize) -> ObjectsAction {
        if let Some(step) = EventHandler::focus_move(key) {
            self.set_focus(step.apply(self.focus, FIELD_COUNT));
            return ObjectsAction::None;
        }

        match key.code {
            KeyCode::Enter if self.focus == 0 => self.set_focus(1),
            KeyCode::Enter => return self.save(),
            KeyCode::PageDown => {
                self.scroll = (self.scroll + 1).min(record_count.saturating_sub(1));
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(1),
            _ => match self.focus {
                0 => {
                    self.name.handle_key(key);
                }
                1 => {
                    self.description.handle_key(key);
                }
                _ => {}
            },
        }
        ObjectsAction::None
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, ctx: &ViewContext<'_>) {
        let theme = ctx.theme;
        let [title, name, description, save, _, list_title, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new("Registrar objeto")
            .style(theme.title_style)
            .render(title, buf);
        self.name.render_themed(name, buf, theme);
        self.description.render_themed(description, buf, theme);

        let save_style = match (self.focus == SAVE, self.name.value().trim().is_empty()) {
            (_, true) => theme.dimmed_style,
            (true, false) => theme.selection_style.add_modifier(Modifier::BOLD),
            (false, false) => theme.focus_style,
        };
        Paragraph::new(Line::styled("[ Guardar ]", save_style)).render(save, buf);

        Paragraph::new("Lista de objetos")
            .style(theme.title_style)
            .block(Block::default().borders(Borders::TOP).border_style(theme.dimmed_style))
            .render(list_title, buf);

        if ctx.records.is_empty() {
            Paragraph::new("No hay objetos guardados")
                .style(theme.dimmed_style)
                .render(list_area, buf);
            return;
        }

        let items: Vec<ListItem<'_>> = ctx
            .records
            .iter()
            .map(|record| {
                let mut lines = vec![Line::styled(record.name(), theme.base_style.add_modifier(Modifier::BOLD))];
                if !record.description().is_empty() {
                    lines.push(Line::styled(record.description(), theme.dimmed_style));
                }
                ListItem::new(Text::from(lines))
            })
            .collect();

        let selected = self.scroll.min(ctx.records.len() - 1);
        let mut state = ListState::default().with_selected(Some(selected));
        StatefulWidget::render(
            List::new(items)
                .style(theme.base_style)
                .highlight_style(theme.surface_style),
            list_area,
            buf,
            &mut state,
        );
    }
}

impl Default for ObjectsScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut ObjectsScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(&key(KeyCode::Char(c)), 0);
        }
    }

    #[test]
    fn test_save_dispatches_and_clears() {
        let mut screen = ObjectsScreen::new();
        type_text(&mut screen, "Collar");
        screen.handle_key(&key(KeyCode::Tab), 0);
        type_text(&mut screen, "rojo");

        let action = screen.handle_key(&key(KeyCode::Enter), 0);

        assert_eq!(
            action,
            ObjectsAction::Save {
                name: "Collar".into(),
                description: "rojo".into()
            }
        );
        assert!(screen.name.value().is_empty());
        assert!(screen.description.value().is_empty());
        assert!(screen.name.is_focused());
    }

    #[test]
    fn test_blank_name_ignored_and_kept() {
        let mut screen = ObjectsScreen::new();
        type_text(&mut screen, "  ");
        screen.handle_key(&key(KeyCode::Tab), 0);
        type_text(&mut screen, "sin nombre");

        assert_eq!(screen.handle_key(&key(KeyCode::Enter), 0), ObjectsAction::None);
        assert_eq!(screen.description.value(), "sin nombre");
    }

    #[test]
    fn test_enter_on_name_moves_to_description() {
        let mut screen = ObjectsScreen::new();
        type_text(&mut screen, "Cama");

        assert_eq!(screen.handle_key(&key(KeyCode::Enter), 0), ObjectsAction::None);
        assert!(screen.description.is_focused());
    }

    #[test]
    fn test_scroll_bounded_by_records() {
        let mut screen = ObjectsScreen::new();
        for _ in 0..5 {
            screen.handle_key(&key(KeyCode::PageDown), 2);
        }
        assert_eq!(screen.scroll, 1);
    }
}
