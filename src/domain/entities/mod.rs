//! Domain entity definitions.

mod catalog;
mod record;
mod session;

pub use catalog::{CATALOG, CatalogItem, Price};
pub use record::{NewRecord, Record, RecordId};
pub use session::{Session, Username};
