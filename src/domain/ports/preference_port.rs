//! Preference storage port definition.

use async_trait::async_trait;

use crate::domain::errors::PreferenceError;

/// Port for app-scoped key/value preferences.
#[async_trait]
pub trait PreferencePort: Send + Sync {
    /// Reads a boolean preference. `None` when the key was never written.
    async fn get_bool(&self, key: &str) -> Result<Option<bool>, PreferenceError>;

    /// Writes and commits a boolean preference, replacing any prior value.
    async fn set_bool(&self, key: &str, value: bool) -> Result<(), PreferenceError>;
}
