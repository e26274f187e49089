use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pupistore::application::services::{PreferenceStore, ProcessSimulator, RecordManager};
use pupistore::infrastructure::database::DATABASE_FILE_NAME;
use pupistore::infrastructure::{
    AppConfig, CliArgs, FilePreferences, SqliteRecordStore, StorageManager,
};
use pupistore::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<(AppConfig, StorageManager)> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok((config, storage))
}

async fn create_app() -> Result<App> {
    let (config, storage) = load_config()?;

    init_logging(&config)?;

    info!(version = pupistore::VERSION, "Starting PupiStore");

    let preferences = Arc::new(FilePreferences::in_dir(storage.config_dir()));
    let preferences = Arc::new(PreferenceStore::open(preferences).await);

    let data_dir = config
        .effective_data_dir()
        .ok_or_else(|| eyre!("Could not determine the data directory"))?;
    let store = Arc::new(SqliteRecordStore::open(&data_dir.join(DATABASE_FILE_NAME))?);
    let records = Arc::new(RecordManager::new(store));
    if let Err(e) = records.refresh().await {
        warn!(error = %e, "Failed to load saved records");
    }

    Ok(App::new(&config, preferences, records, ProcessSimulator::new()))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app().await?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
