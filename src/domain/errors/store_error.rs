//! Persistence error types.

use thiserror::Error;

/// Record store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record storage unavailable: {0}")]
    Unavailable(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("storage task failed: {0}")]
    Task(String),
}

impl StoreError {
    /// Creates database error.
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }
}

/// Preference storage failures.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read preferences: {0}")]
    Read(String),

    #[error("failed to write preferences: {0}")]
    Write(String),
}

impl PreferenceError {
    /// Creates read error.
    #[must_use]
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read(message.into())
    }

    /// Creates write error.
    #[must_use]
    pub fn write(message: impl Into<String>) -> Self {
        Self::Write(message.into())
    }
}
