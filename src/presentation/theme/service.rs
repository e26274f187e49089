use super::adapter::ColorConverter;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const FALLBACK_ACCENT: Color = Color::Magenta;

/// Resolved palette for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
    pub accent: Color,
    pub base_style: Style,
    pub surface_style: Style,
    pub title_style: Style,
    pub dimmed_style: Style,
    pub selection_style: Style,
    pub focus_style: Style,
    pub price_style: Style,
    pub error_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(FALLBACK_ACCENT, false)
    }
}

impl Theme {
    #[must_use]
    pub fn new(accent_color_str: &str, dark: bool) -> Self {
        Self::from_color(parse_color(accent_color_str), dark)
    }

    #[must_use]
    pub fn from_color(accent: Color, dark: bool) -> Self {
        let (background, surface, text, muted) = if dark {
            (
                ColorConverter::shade(accent, 0.06, 0.15),
                ColorConverter::shade(accent, 0.12, 0.2),
                Color::Rgb(235, 235, 235),
                Color::Rgb(150, 150, 150),
            )
        } else {
            (
                ColorConverter::shade(accent, 0.97, 0.3),
                ColorConverter::shade(accent, 0.92, 0.35),
                Color::Rgb(25, 25, 25),
                Color::Rgb(110, 110, 110),
            )
        };
        let selection_bg = ColorConverter::shade(accent, if dark { 0.25 } else { 0.8 }, 0.45);
        let price = if dark {
            Color::Rgb(129, 199, 132)
        } else {
            Color::Rgb(46, 125, 50)
        };

        Self {
            dark,
            accent,
            base_style: Style::default().bg(background).fg(text),
            surface_style: Style::default().bg(surface).fg(text),
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(muted),
            selection_style: Style::default().bg(selection_bg).fg(text),
            focus_style: Style::default().fg(accent),
            price_style: Style::default().fg(price),
            error_style: Style::default().fg(Color::Red),
        }
    }

    /// Same accent with the other mode.
    #[must_use]
    pub fn with_mode(self, dark: bool) -> Self {
        if dark == self.dark {
            self
        } else {
            Self::from_color(self.accent, dark)
        }
    }
}

/// Parses a color name or `#rgb`/`#rrggbb`, falling back to the default accent.
#[must_use]
pub fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if let Some((r, g, b)) = s.strip_prefix('#').and_then(parse_hex_color) {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        "pink" => Color::Indexed(211),
        _ => FALLBACK_ACCENT,
    }
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.is_ascii() {
        return None;
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            Some((short(0)?, short(1)?, short(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("#12345"), FALLBACK_ACCENT);
        assert_eq!(parse_color("Invalid"), FALLBACK_ACCENT);
    }

    #[test]
    fn test_modes_differ() {
        let light = Theme::new("Magenta", false);
        let dark = light.with_mode(true);

        assert!(dark.dark);
        assert!(!light.dark);
        assert_ne!(light.base_style, dark.base_style);
        assert_eq!(light.accent, dark.accent);
    }

    #[test]
    fn test_with_same_mode_is_identity() {
        let theme = Theme::new("#336699", true);
        assert_eq!(theme.with_mode(true), theme);
    }
}
