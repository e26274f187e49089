//! Record store port definition.

use async_trait::async_trait;

use crate::domain::entities::{NewRecord, Record};
use crate::domain::errors::StoreError;

/// Port for the local `objetos` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStorePort: Send + Sync {
    /// Appends a record; the returned id is greater than every existing id.
    async fn insert(&self, record: NewRecord) -> Result<Record, StoreError>;

    /// Returns every record, most recent first.
    async fn list_all(&self) -> Result<Vec<Record>, StoreError>;
}
