use super::app_config::{LayoutMode, LogLevel, StartRoute};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pupistore",
    version,
    about = "PupiStore, a pet accessory storefront for the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Directory for the database and log file.
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Screen shown on launch.
    #[arg(long, value_enum)]
    pub start_route: Option<StartRoute>,

    /// Home layout (tab bar or side rail).
    #[arg(long, value_enum)]
    pub layout: Option<LayoutMode>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
