use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget},
};

use super::view::{ViewContext, centered};

/// Placeholder for tabs without content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyScreen {
    title: &'static str,
}

impl EmptyScreen {
    #[must_use]
    pub const fn new(title: &'static str) -> Self {
        Self { title }
    }

    #[must_use]
    pub fn message(self) -> String {
        format!("{} (no implementado)", self.title)
    }

    pub fn render(self, area: Rect, buf: &mut Buffer, ctx: &ViewContext<'_>) {
        Paragraph::new(self.message())
            .style(ctx.theme.dimmed_style)
            .centered()
            .render(centered(area, area.width, 1), buf);
    }
}
