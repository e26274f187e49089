//! PupiStore - a small pet accessory storefront for the terminal.
//!
//! Login and registration, a product catalog behind tab navigation, a
//! persisted dark mode preference and a local record list, layered as
//! domain, application, infrastructure and presentation.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, navigation and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and storage adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "pupistore";
