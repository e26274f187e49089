use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::theme::Theme;

/// Checkbox-style boolean row: `[x] label`.
pub struct Toggle<'a> {
    label: &'a str,
    checked: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Toggle<'a> {
    #[must_use]
    pub const fn new(label: &'a str, checked: bool, theme: &'a Theme) -> Self {
        Self {
            label,
            checked,
            focused: false,
            theme,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for Toggle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mark = if self.checked { "[x]" } else { "[ ]" };
        let label_style = if self.focused {
            self.theme.selection_style
        } else {
            self.theme.base_style
        };

        Paragraph::new(Line::from(vec![
            Span::styled(mark, self.theme.focus_style),
            Span::raw(" "),
            Span::styled(self.label, label_style),
        ]))
        .render(area, buf);
    }
}
