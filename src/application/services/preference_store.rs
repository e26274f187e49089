//! Dark mode preference with replay-on-subscribe streams.

use std::sync::Arc;

use futures_util::stream::{self, BoxStream, StreamExt};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::errors::PreferenceError;
use crate::domain::ports::PreferencePort;

/// Key of the persisted dark mode flag.
pub const DARK_MODE_KEY: &str = "dark_mode_enabled";

/// Single writer path for the dark mode flag.
///
/// Readers subscribe through [`PreferenceStore::read`]; every stream
/// starts with the latest value.
pub struct PreferenceStore {
    port: Arc<dyn PreferencePort>,
    dark_mode: watch::Sender<bool>,
}

impl PreferenceStore {
    /// Loads the committed flag. An absent flag is created with the
    /// default; unreadable storage falls back to the default.
    pub async fn open(port: Arc<dyn PreferencePort>) -> Self {
        let value = match port.get_bool(DARK_MODE_KEY).await {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("No theme preference yet, writing default");
                if let Err(e) = port.set_bool(DARK_MODE_KEY, false).await {
                    warn!(error = %e, "Failed to write default theme preference");
                }
                false
            }
            Err(e) => {
                warn!(error = %e, "Theme preference unreadable, using default");
                false
            }
        };

        info!(dark_mode = value, "Theme preference loaded");
        let (dark_mode, _) = watch::channel(value);
        Self { port, dark_mode }
    }

    /// Latest known value.
    #[must_use]
    pub fn current(&self) -> bool {
        *self.dark_mode.borrow()
    }

    /// Fresh subscription: yields the current value at once, then each
    /// later write. Ends only when the store is dropped.
    #[must_use]
    pub fn read(&self) -> BoxStream<'static, bool> {
        let rx = self.dark_mode.subscribe();
        stream::unfold((rx, true), |(mut rx, first)| async move {
            if !first && rx.changed().await.is_err() {
                return None;
            }
            let value = *rx.borrow_and_update();
            Some((value, (rx, false)))
        })
        .boxed()
    }

    /// Commits `value` and publishes it.
    ///
    /// The value is published even when the commit fails, so the running
    /// session keeps the user's choice.
    ///
    /// # Errors
    /// Returns the storage error of a failed commit.
    pub async fn write(&self, value: bool) -> Result<(), PreferenceError> {
        let result = self.port.set_bool(DARK_MODE_KEY, value).await;
        match &result {
            Ok(()) => debug!(dark_mode = value, "Theme preference committed"),
            Err(e) => warn!(error = %e, dark_mode = value, "Theme preference not committed"),
        }

        self.dark_mode.send_replace(value);
        result
    }
}
