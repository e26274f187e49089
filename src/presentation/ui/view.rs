//! Read-only application state handed to rendering.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::application::services::{ProcessState, RecordList};
use crate::infrastructure::config::LayoutMode;
use crate::presentation::theme::Theme;

/// Everything a screen may read while drawing.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub theme: &'a Theme,
    pub dark_mode: bool,
    pub records: &'a RecordList,
    pub process: ProcessState,
    pub layout: LayoutMode,
}

/// Centers a box of at most `width` x `height` inside `area`.
#[must_use]
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(middle);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let inner = centered(area, 50, 10);

        assert_eq!((inner.width, inner.height), (50, 10));
        assert_eq!((inner.x, inner.y), (25, 15));
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let inner = centered(area, 50, 10);

        assert_eq!(inner, area);
    }
}
