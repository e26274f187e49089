//! Domain layer with core entities, navigation and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Navigation state machines and routes.
pub mod navigation;
/// Port definitions.
pub mod ports;

pub use entities::{CatalogItem, Record, Session, Username};
pub use errors::{PreferenceError, StoreError, ValidationError};
pub use navigation::{AppRoute, NavController, NavOptions, TabRoute};
pub use ports::{PreferencePort, RecordStorePort};
