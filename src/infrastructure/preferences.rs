//! TOML-file preference adapter.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use super::config::storage::write_atomic;
use crate::domain::errors::PreferenceError;
use crate::domain::ports::PreferencePort;

/// File name of the preferences table inside the config directory.
pub const PREFERENCES_FILE_NAME: &str = "user_prefs.toml";

type PreferenceTable = BTreeMap<String, bool>;

/// Stores boolean preferences as a flat TOML table.
///
/// File access happens on the blocking pool. Read-modify-write cycles are
/// serialized by an in-process lock.
#[derive(Clone)]
pub struct FilePreferences {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl FilePreferences {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Arc::new(path),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Preferences file inside `config_dir`.
    #[must_use]
    pub fn in_dir(config_dir: &Path) -> Self {
        Self::new(config_dir.join(PREFERENCES_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn blocking<T, F>(&self, op: F) -> Result<T, PreferenceError>
    where
        T: Send + 'static,
        F: FnOnce(&Path) -> Result<T, PreferenceError> + Send + 'static,
    {
        let path = Arc::clone(&self.path);
        let lock = Arc::clone(&self.lock);
        tokio::task::spawn_blocking(move || {
            let _guard = lock.lock();
            op(&path)
        })
        .await
        .map_err(|e| PreferenceError::Unavailable(e.to_string()))?
    }
}

fn load_table(path: &Path) -> Result<PreferenceTable, PreferenceError> {
    match fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).map_err(|e| PreferenceError::read(e.to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(PreferenceTable::new()),
        Err(e) => Err(PreferenceError::read(e.to_string())),
    }
}

#[async_trait]
impl PreferencePort for FilePreferences {
    async fn get_bool(&self, key: &str) -> Result<Option<bool>, PreferenceError> {
        let key = key.to_string();
        self.blocking(move |path| Ok(load_table(path)?.get(&key).copied()))
            .await
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<(), PreferenceError> {
        let key = key.to_string();
        self.blocking(move |path| {
            let mut table = match load_table(path) {
                Ok(table) => table,
                Err(PreferenceError::Read(reason)) => {
                    debug!(%reason, "Overwriting unreadable preferences file");
                    PreferenceTable::new()
                }
                Err(e) => return Err(e),
            };
            table.insert(key, value);

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| PreferenceError::write(e.to_string()))?;
            }
            write_atomic(path, &table).map_err(|e| PreferenceError::write(e.to_string()))
        })
        .await
    }
}
