//! Typed navigation destinations.

use std::fmt;

use crate::domain::entities::Username;

/// A navigation destination.
///
/// The key names the destination regardless of its payload; stack
/// matching and saved state both go by key.
pub trait Destination: Clone + fmt::Display {
    fn key(&self) -> &'static str;
}

/// Top-level destinations of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// `registro`
    Registration,
    /// `login`
    Login,
    /// `home/{username}`
    Home { username: Username },
}

impl AppRoute {
    pub const REGISTRATION: &'static str = "registro";
    pub const LOGIN: &'static str = "login";
    pub const HOME: &'static str = "home";

    /// Home route for a logged-in user.
    #[must_use]
    pub const fn home(username: Username) -> Self {
        Self::Home { username }
    }
}

impl Destination for AppRoute {
    fn key(&self) -> &'static str {
        match self {
            Self::Registration => Self::REGISTRATION,
            Self::Login => Self::LOGIN,
            Self::Home { .. } => Self::HOME,
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home { username } => write!(f, "{}/{username}", Self::HOME),
            other => f.write_str(other.key()),
        }
    }
}

/// Destinations of the nested navigation inside the home shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabRoute {
    Inicio,
    Buscar,
    Favoritos,
    Carrito,
    Perfil,
    ThemeSettings,
    Objetos,
    Proceso,
}

impl TabRoute {
    /// Items shown in the tab bar or side rail, in display order.
    pub const BAR: [Self; 5] = [
        Self::Inicio,
        Self::Buscar,
        Self::Favoritos,
        Self::Carrito,
        Self::Perfil,
    ];

    /// Start destination of the nested graph.
    pub const START: Self = Self::Inicio;

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inicio => "Inicio",
            Self::Buscar => "Buscar",
            Self::Favoritos => "Favoritos",
            Self::Carrito => "Carrito",
            Self::Perfil => "Perfil",
            Self::ThemeSettings => "Tema",
            Self::Objetos => "Objetos",
            Self::Proceso => "Proceso",
        }
    }

    /// Whether the destination appears in the tab bar.
    #[must_use]
    pub fn is_bar_item(self) -> bool {
        Self::BAR.contains(&self)
    }
}

impl Destination for TabRoute {
    fn key(&self) -> &'static str {
        match self {
            Self::Inicio => "inicio",
            Self::Buscar => "buscar",
            Self::Favoritos => "favoritos",
            Self::Carrito => "carrito",
            Self::Perfil => "perfil",
            Self::ThemeSettings => "theme_settings",
            Self::Objetos => "objetos",
            Self::Proceso => "proceso",
        }
    }
}

impl fmt::Display for TabRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
