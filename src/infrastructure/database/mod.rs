//! Local SQLite persistence.

mod sqlite_record_store;

pub use sqlite_record_store::{DATABASE_FILE_NAME, SCHEMA_VERSION, SqliteRecordStore};
