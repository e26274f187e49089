//! `objetos` table backed by SQLite.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rusqlite::{Connection, params};
use tracing::{debug, info, warn};

use crate::domain::entities::{NewRecord, Record, RecordId};
use crate::domain::errors::StoreError;
use crate::domain::ports::RecordStorePort;

/// Database file name inside the data directory.
pub const DATABASE_FILE_NAME: &str = "pupi_db.sqlite3";

/// Value kept in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

const CREATE_OBJETOS: &str = "CREATE TABLE IF NOT EXISTS objetos (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre      TEXT NOT NULL,
    descripcion TEXT NOT NULL
)";

fn sql_err(e: rusqlite::Error) -> StoreError {
    StoreError::database(e.to_string())
}

/// Record store over a single mutex-guarded connection.
///
/// Every call runs on the blocking pool.
#[derive(Clone)]
pub struct SqliteRecordStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteRecordStore {
    /// Opens (or creates) the database file and brings its schema to
    /// [`SCHEMA_VERSION`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory or database cannot be opened.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        }
        let conn = Connection::open(path).map_err(sql_err)?;
        info!(path = %path.display(), "Database opened");
        Self::with_connection(conn)
    }

    /// Private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if SQLite cannot allocate the database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory().map_err(sql_err)?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        migrate(&conn).map_err(sql_err)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn blocking<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || op(&conn.lock()).map_err(sql_err))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

/// Fresh databases get the table; any other foreign version is dropped and
/// recreated.
fn migrate(conn: &Connection) -> rusqlite::Result<()> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    match version {
        SCHEMA_VERSION => {}
        0 => debug!("Initializing database schema"),
        other => {
            warn!(
                found = other,
                expected = SCHEMA_VERSION,
                "Unknown schema version, recreating tables"
            );
            conn.execute_batch("DROP TABLE IF EXISTS objetos;")?;
        }
    }

    conn.execute(CREATE_OBJETOS, [])?;
    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    Ok(())
}

#[async_trait]
impl RecordStorePort for SqliteRecordStore {
    async fn insert(&self, record: NewRecord) -> Result<Record, StoreError> {
        self.blocking(move |conn| {
            conn.execute(
                "INSERT INTO objetos (nombre, descripcion) VALUES (?1, ?2)",
                params![record.name(), record.description()],
            )?;
            let id = RecordId(conn.last_insert_rowid());
            debug!(%id, "Record inserted");
            Ok(record.into_record(id))
        })
        .await
    }

    async fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        self.blocking(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, nombre, descripcion FROM objetos ORDER BY id DESC")?;
            let rows = stmt.query_map([], |row| {
                Ok(Record::new(
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?;
            rows.collect()
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn new_record(name: &str, description: &str) -> NewRecord {
        NewRecord::new(name, description).unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = SqliteRecordStore::open_in_memory().unwrap();

        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_strictly_increase() {
        let store = SqliteRecordStore::open_in_memory().unwrap();

        let first = store.insert(new_record("Collar", "rojo")).await.unwrap();
        let second = store.insert(new_record("Correa", "")).await.unwrap();

        assert!(second.id() > first.id());
        assert_eq!(second.name(), "Correa");
        assert_eq!(second.description(), "");
    }

    #[tokio::test]
    async fn test_list_is_id_descending() {
        let store = SqliteRecordStore::open_in_memory().unwrap();
        for name in ["a", "b", "c"] {
            store.insert(new_record(name, "")).await.unwrap();
        }

        let names: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, ["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_inserted_record_is_listed() {
        let store = SqliteRecordStore::open_in_memory().unwrap();

        let inserted = store.insert(new_record("Cama", "suave")).await.unwrap();

        assert_eq!(store.list_all().await.unwrap(), vec![inserted]);
    }

    #[tokio::test]
    async fn test_file_database_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join(DATABASE_FILE_NAME);

        {
            let store = SqliteRecordStore::open(&path).unwrap();
            store.insert(new_record("Hueso", "")).await.unwrap();
        }

        let reopened = SqliteRecordStore::open(&path).unwrap();
        let records = reopened.list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "Hueso");
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DATABASE_FILE_NAME);

        let first = {
            let store = SqliteRecordStore::open(&path).unwrap();
            store.insert(new_record("uno", "")).await.unwrap()
        };

        let store = SqliteRecordStore::open(&path).unwrap();
        let second = store.insert(new_record("dos", "")).await.unwrap();
        assert!(second.id() > first.id());
    }

    #[tokio::test]
    async fn test_foreign_schema_version_is_wiped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DATABASE_FILE_NAME);
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE objetos (id INTEGER PRIMARY KEY, nombre TEXT, color TEXT);
                 INSERT INTO objetos (nombre, color) VALUES ('viejo', 'azul');
                 PRAGMA user_version = 7;",
            )
            .unwrap();
        }

        let store = SqliteRecordStore::open(&path).unwrap();

        assert!(store.list_all().await.unwrap().is_empty());
        let version: i64 = store
            .conn
            .lock()
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
        store.insert(new_record("nuevo", "")).await.unwrap();
    }
}
