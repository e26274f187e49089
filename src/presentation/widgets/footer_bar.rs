use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crate::presentation::theme::adapter::ColorConverter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Screen-local key hint: `(key, label)`.
pub type Hint = (&'static str, &'static str);

pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let key_bg = ColorConverter::shade(theme.accent, if theme.dark { 0.08 } else { 0.88 }, 0.5);

        Self {
            background: theme.surface_style,
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: theme.surface_style.bg(key_bg),
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
        }
    }
}

/// Bottom hint line: screen hints first, then the visible global bindings.
pub struct FooterBar<'a> {
    hints: &'a [Hint],
    keybindings: Vec<&'a Keybind>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(hints: &'a [Hint]) -> Self {
        Self {
            hints,
            keybindings: Vec::new(),
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub fn keybindings(mut self, keybindings: impl IntoIterator<Item = &'a Keybind>) -> Self {
        self.keybindings = keybindings.into_iter().collect();
        self
    }

    #[must_use]
    pub fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    pub(crate) fn format_key(key: &KeyEvent) -> String {
        use std::fmt::Write;
        let mut s = String::new();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("C-");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("A-");
        }

        match key.code {
            KeyCode::Char(c) => s.push(c),
            KeyCode::Enter => s.push_str("Enter"),
            KeyCode::Esc => s.push_str("Esc"),
            KeyCode::Tab => s.push_str("Tab"),
            KeyCode::F(n) => {
                let _ = write!(s, "F{n}");
            }
            other => {
                let _ = write!(s, "{other:?}");
            }
        }
        s
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let locals = self
            .hints
            .iter()
            .map(|(key, label)| ((*key).to_string(), (*label).to_string()));
        let globals = self
            .keybindings
            .iter()
            .map(|bind| (Self::format_key(&bind.key), bind.label.to_string()));

        let mut spans = Vec::new();
        for (i, (key, label)) in locals.chain(globals).enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {label} "), self.style.label_style));
            spans.push(Span::styled(format!(" {key} "), self.style.key_style));
        }
        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        Paragraph::new(Line::from(self.spans())).render(area, buf);
    }
}
