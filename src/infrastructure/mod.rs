//! Infrastructure layer with storage adapters and configuration.

/// Application configuration.
pub mod config;
/// SQLite record storage.
pub mod database;
/// Preference file adapter.
pub mod preferences;

pub use config::{AppConfig, CliArgs, LayoutMode, LogLevel, StartRoute, StorageManager};
pub use database::SqliteRecordStore;
pub use preferences::FilePreferences;
