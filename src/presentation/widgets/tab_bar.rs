use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::navigation::TabRoute;
use crate::infrastructure::config::LayoutMode;
use crate::presentation::theme::Theme;

/// Placement of the tab items around the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Horizontal bar under the content.
    Portrait,
    /// Vertical rail left of the content.
    Landscape,
}

impl Orientation {
    /// Forced by `mode`, otherwise landscape when the area has at least twice
    /// as many columns as rows. Cells are about twice as tall as wide.
    #[must_use]
    pub fn resolve(mode: LayoutMode, area: Rect) -> Self {
        match mode {
            LayoutMode::Portrait => Self::Portrait,
            LayoutMode::Landscape => Self::Landscape,
            LayoutMode::Auto if u32::from(area.width) >= 2 * u32::from(area.height) => {
                Self::Landscape
            }
            LayoutMode::Auto => Self::Portrait,
        }
    }

    /// Splits `area` into `(content, bar)`.
    #[must_use]
    pub fn split(self, area: Rect) -> (Rect, Rect) {
        match self {
            Self::Portrait => {
                let [content, bar] =
                    Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).areas(area);
                (content, bar)
            }
            Self::Landscape => {
                let [bar, content] =
                    Layout::horizontal([Constraint::Length(14), Constraint::Fill(1)]).areas(area);
                (content, bar)
            }
        }
    }
}

/// Tab bar (portrait) or navigation rail (landscape).
pub struct TabBar<'a> {
    selected: Option<TabRoute>,
    orientation: Orientation,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    #[must_use]
    pub const fn new(selected: Option<TabRoute>, orientation: Orientation, theme: &'a Theme) -> Self {
        Self {
            selected,
            orientation,
            theme,
        }
    }

    fn item_line(&self, index: usize, tab: TabRoute) -> Line<'static> {
        let style = if Some(tab) == self.selected {
            self.theme.selection_style.add_modifier(Modifier::BOLD)
        } else {
            self.theme.surface_style
        };
        Line::styled(format!("F{} {}", index + 1, tab.label()), style)
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let borders = match self.orientation {
            Orientation::Portrait => Borders::TOP,
            Orientation::Landscape => Borders::RIGHT,
        };
        let block = Block::default()
            .borders(borders)
            .border_style(self.theme.dimmed_style)
            .style(self.theme.surface_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let count = TabRoute::BAR.len();
        let cells = match self.orientation {
            Orientation::Portrait => {
                Layout::horizontal(vec![Constraint::Fill(1); count]).split(inner)
            }
            Orientation::Landscape => {
                Layout::vertical(vec![Constraint::Length(2); count]).split(inner)
            }
        };

        for (index, (tab, cell)) in TabRoute::BAR.iter().zip(cells.iter()).enumerate() {
            Paragraph::new(self.item_line(index, *tab))
                .centered()
                .render(*cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_forced_by_mode() {
        let tall = Rect::new(0, 0, 40, 40);
        let wide = Rect::new(0, 0, 200, 20);

        assert_eq!(Orientation::resolve(LayoutMode::Landscape, tall), Orientation::Landscape);
        assert_eq!(Orientation::resolve(LayoutMode::Portrait, wide), Orientation::Portrait);
    }

    #[test]
    fn test_orientation_auto_from_size() {
        assert_eq!(
            Orientation::resolve(LayoutMode::Auto, Rect::new(0, 0, 160, 40)),
            Orientation::Landscape
        );
        assert_eq!(
            Orientation::resolve(LayoutMode::Auto, Rect::new(0, 0, 60, 40)),
            Orientation::Portrait
        );
    }

    #[test]
    fn test_selected_tab_highlighted() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);

        TabBar::new(Some(TabRoute::Carrito), Orientation::Portrait, &theme).render(area, &mut buf);

        let row: String = (0..80).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(row.contains("F4 Carrito"));
        let carrito_x = u16::try_from(row.find("Carrito").unwrap()).unwrap();
        assert_eq!(buf[(carrito_x, 1)].bg, theme.selection_style.bg.unwrap());
    }
}
