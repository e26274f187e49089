//! Global key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

/// Actions handled by the shell before a screen sees the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Back,
    ToggleTheme,
    Logout,
    NextTab,
    PreviousTab,
    /// Index into the tab bar.
    SelectTab(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        self.key.code == key.code && self.key.modifiers == key.modifiers
    }
}

/// Ordered set of global bindings. First match wins.
#[derive(Debug, Clone)]
pub struct Keymap {
    binds: Vec<Keybind>,
}

impl Keymap {
    #[must_use]
    pub fn new(binds: Vec<Keybind>) -> Self {
        Self { binds }
    }

    /// Resolves a key press to a global action.
    #[must_use]
    pub fn resolve(&self, key: &KeyEvent) -> Option<Action> {
        self.binds
            .iter()
            .find(|bind| bind.matches(key))
            .map(|bind| bind.action)
    }

    /// Bindings shown in the hint bar.
    pub fn visible(&self) -> impl Iterator<Item = &Keybind> {
        self.binds.iter().filter(|bind| bind.visible_in_bar)
    }
}

impl Default for Keymap {
    fn default() -> Self {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);

        let mut binds = vec![
            Keybind::new(ctrl('c'), Action::Quit, "Salir"),
            Keybind::new(plain(KeyCode::Esc), Action::Back, "Atrás"),
            Keybind::new(ctrl('t'), Action::ToggleTheme, "Tema"),
            Keybind::new(ctrl('l'), Action::Logout, "Cerrar sesión"),
            Keybind::new(ctrl('n'), Action::NextTab, "Pestaña").hidden(),
            Keybind::new(ctrl('p'), Action::PreviousTab, "Pestaña anterior").hidden(),
        ];

        for index in 0..5u8 {
            binds.push(
                Keybind::new(
                    plain(KeyCode::F(index + 1)),
                    Action::SelectTab(index),
                    format!("Pestaña {}", index + 1),
                )
                .hidden(),
            );
        }

        Self::new(binds)
    }
}
