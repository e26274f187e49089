//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::domain::navigation::AppRoute;

pub(crate) const APP_NAME: &str = "pupistore";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "example";

const LOG_FILE_NAME: &str = "pupistore.log";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// First screen shown on launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StartRoute {
    #[default]
    Login,
    Registro,
}

impl StartRoute {
    #[must_use]
    pub const fn route(self) -> AppRoute {
        match self {
            Self::Login => AppRoute::Login,
            Self::Registro => AppRoute::Registration,
        }
    }
}

/// Home shell layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Derived from the terminal size.
    #[default]
    Auto,
    /// Bottom tab bar.
    Portrait,
    /// Side navigation rail.
    Landscape,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

fn default_accent_color() -> String {
    "Magenta".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

/// Application configuration, file values overridden by CLI.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Directory holding the database and the log file.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default)]
    pub start_route: StartRoute,

    #[serde(default)]
    pub layout: LayoutMode,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(data_dir) = args.data_dir {
            self.data_dir = Some(data_dir);
        }
        if let Some(start_route) = args.start_route {
            self.start_route = start_route;
        }
        if let Some(layout) = args.layout {
            self.layout = layout;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default data directory.
    #[must_use]
    pub fn default_data_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Returns effective data directory.
    #[must_use]
    pub fn effective_data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(Self::default_data_dir)
    }

    /// Returns effective log path. Follows `data_dir` when only that is set.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| self.effective_data_dir().map(|dir| dir.join(LOG_FILE_NAME)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config_file() {
        let toml_content = r##"
            log_level = "debug"
            data_dir = "/tmp/pupi"
            start_route = "registro"
            layout = "landscape"

            [theme]
            accent_color = "#ff8800"
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/pupi")));
        assert_eq!(config.start_route, StartRoute::Registro);
        assert_eq!(config.layout, LayoutMode::Landscape);
        assert_eq!(config.theme.accent_color, "#ff8800");
    }

    #[test]
    fn test_log_level_display_is_a_filter_directive() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            let directive = level.to_string();
            assert!(
                tracing_subscriber::EnvFilter::try_new(&directive).is_ok(),
                "{directive}"
            );
        }
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_default_config() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.start_route, StartRoute::Login);
        assert_eq!(config.layout, LayoutMode::Auto);
        assert_eq!(config.theme.accent_color, "Magenta");
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config: AppConfig = toml::from_str(r#"layout = "portrait""#).unwrap();
        let args = CliArgs::parse_from([
            "pupistore",
            "--layout",
            "landscape",
            "--start-route",
            "registro",
            "--data-dir",
            "/var/pupi",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.layout, LayoutMode::Landscape);
        assert_eq!(config.start_route.route(), AppRoute::Registration);
        assert_eq!(
            config.effective_log_path(),
            Some(PathBuf::from("/var/pupi").join(LOG_FILE_NAME))
        );
    }

    #[test]
    fn test_explicit_log_path_wins() {
        let config = AppConfig {
            log_path: Some(PathBuf::from("/tmp/x.log")),
            data_dir: Some(PathBuf::from("/var/pupi")),
            ..AppConfig::default()
        };

        assert_eq!(config.effective_log_path(), Some(PathBuf::from("/tmp/x.log")));
    }
}
