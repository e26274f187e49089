//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{AppConfig, LayoutMode, LogLevel, StartRoute, ThemeConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
