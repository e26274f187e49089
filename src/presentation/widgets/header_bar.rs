use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBarStyle {
    pub background: Style,
    pub title: Style,
    pub subtitle: Style,
    pub indicator: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let subtitle_bg = ColorConverter::shade(theme.accent, if theme.dark { 0.1 } else { 0.85 }, 0.5);

        Self {
            background: theme.surface_style,
            title: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            subtitle: theme.surface_style.bg(subtitle_bg),
            indicator: theme.surface_style.add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            subtitle: Style::default().fg(Color::DarkGray),
            indicator: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

/// Top bar: title block on the left, theme indicator on the right.
pub struct HeaderBar<'a> {
    title: &'a str,
    subtitle: Option<&'a str>,
    dark_mode: bool,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            subtitle: None,
            dark_mode: false,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    #[must_use]
    pub const fn dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    #[must_use]
    pub fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    const fn mode_indicator(&self) -> &'static str {
        if self.dark_mode {
            " ☾ Oscuro "
        } else {
            " ☀ Claro "
        }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let mut left_spans = vec![Span::styled(format!(" {} ", self.title), self.style.title)];
        if let Some(subtitle) = self.subtitle {
            left_spans.push(Span::raw(" "));
            left_spans.push(Span::styled(format!(" {subtitle} "), self.style.subtitle));
        }
        Paragraph::new(Line::from(left_spans)).render(area, buf);

        let indicator = self.mode_indicator();
        let width = u16::try_from(indicator.width()).unwrap_or(u16::MAX);
        let left_width = u16::try_from(
            self.title.width() + 2 + self.subtitle.map_or(0, |s| s.width() + 3),
        )
        .unwrap_or(u16::MAX);

        if width < area.width.saturating_sub(left_width) {
            let right_area = Rect::new(area.right().saturating_sub(width), area.y, width, 1);
            Paragraph::new(Span::styled(indicator, self.style.indicator)).render(right_area, buf);
        }
    }
}
