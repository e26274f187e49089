//! Observable record list backed by the record store.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Mutex, watch};
use tracing::{debug, info};

use crate::domain::entities::{NewRecord, Record};
use crate::domain::errors::{StoreError, ValidationError};
use crate::domain::ports::RecordStorePort;

/// Snapshot published to observers. Replaced wholesale, never mutated.
pub type RecordList = Arc<Vec<Record>>;

/// Record insert failures.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Mediates between screens and the record store.
pub struct RecordManager {
    store: Arc<dyn RecordStorePort>,
    list: watch::Sender<RecordList>,
    // Serializes re-read + publish so the last snapshot sent is the newest read.
    refresh_lock: Mutex<()>,
}

impl RecordManager {
    /// Creates a manager with an empty list. Call [`Self::refresh`] once
    /// to load what the store already holds.
    #[must_use]
    pub fn new(store: Arc<dyn RecordStorePort>) -> Self {
        let (list, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            store,
            list,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Subscribes to list snapshots. The receiver starts at the latest one.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RecordList> {
        self.list.subscribe()
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn current(&self) -> RecordList {
        Arc::clone(&self.list.borrow())
    }

    /// Re-reads the full list and publishes it.
    ///
    /// # Errors
    /// Returns the store error; the previous snapshot stays published.
    pub async fn refresh(&self) -> Result<(), StoreError> {
        let _guard = self.refresh_lock.lock().await;
        let records = self.store.list_all().await?;
        debug!(count = records.len(), "Record list refreshed");
        self.list.send_replace(Arc::new(records));
        Ok(())
    }

    /// Validates, writes, re-reads, then publishes.
    ///
    /// # Errors
    /// Returns a validation error for a blank name (the store is not
    /// touched) or the store error of the write or re-read.
    pub async fn insert(&self, name: &str, description: &str) -> Result<Record, RecordError> {
        let new_record = NewRecord::new(name, description)?;
        let record = self.store.insert(new_record).await?;
        info!(id = %record.id(), name = record.name(), "Record saved");

        self.refresh().await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RecordId;
    use crate::domain::ports::mocks::{MemoryRecordStore, MockRecordStorePort};

    #[tokio::test]
    async fn test_starts_empty() {
        let manager = RecordManager::new(Arc::new(MemoryRecordStore::new()));
        assert!(manager.current().is_empty());

        manager.refresh().await.unwrap();
        assert!(manager.current().is_empty());
    }

    #[tokio::test]
    async fn test_insert_publishes_newest_first() {
        let manager = RecordManager::new(Arc::new(MemoryRecordStore::new()));
        let mut rx = manager.subscribe();

        let first = manager.insert("Cama", "suave").await.unwrap();
        let second = manager.insert("Collar", "rojo").await.unwrap();

        assert!(rx.has_changed().unwrap());
        let list = rx.borrow_and_update().clone();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name(), "Collar");
        assert_eq!(list[0].description(), "rojo");
        assert!(second.id() > first.id());
        assert_eq!(list[0].id(), second.id());
    }

    #[tokio::test]
    async fn test_blank_name_never_reaches_store() {
        let mut store = MockRecordStorePort::new();
        store.expect_insert().never();
        store.expect_list_all().never();

        let manager = RecordManager::new(Arc::new(store));
        let result = manager.insert("   ", "nada").await;

        assert!(matches!(result, Err(RecordError::Validation(_))));
    }

    #[tokio::test]
    async fn test_insert_rereads_full_list() {
        let mut store = MockRecordStorePort::new();
        store
            .expect_insert()
            .times(1)
            .returning(|record| Ok(record.into_record(RecordId(3))));
        store.expect_list_all().times(1).returning(|| {
            Ok(vec![
                Record::new(3, "Collar", "rojo"),
                Record::new(2, "Cama", ""),
                Record::new(1, "Bol", "azul"),
            ])
        });

        let manager = RecordManager::new(Arc::new(store));
        manager.insert(" Collar ", "rojo").await.unwrap();

        let list = manager.current();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0], Record::new(3, "Collar", "rojo"));
    }

    #[tokio::test]
    async fn test_failed_insert_keeps_snapshot() {
        let mut store = MockRecordStorePort::new();
        store
            .expect_insert()
            .returning(|_| Err(StoreError::Unavailable("disk gone".to_string())));
        store.expect_list_all().never();

        let manager = RecordManager::new(Arc::new(store));
        let rx = manager.subscribe();
        let result = manager.insert("Collar", "rojo").await;

        assert!(matches!(result, Err(RecordError::Store(_))));
        assert!(!rx.has_changed().unwrap());
        assert!(manager.current().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_racing_inserts_both_published() {
        let manager = Arc::new(RecordManager::new(Arc::new(MemoryRecordStore::new())));

        let mut handles = Vec::new();
        for index in 0..8 {
            let manager = Arc::clone(&manager);
            handles.push(tokio::spawn(async move {
                manager
                    .insert(&format!("objeto {index}"), "carrera")
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let list = manager.current();
        assert_eq!(list.len(), 8);
        assert!(list.windows(2).all(|pair| pair[0].id() > pair[1].id()));
    }
}
