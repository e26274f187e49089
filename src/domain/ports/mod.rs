mod preference_port;
mod record_store_port;

pub use preference_port::PreferencePort;
pub use record_store_port::RecordStorePort;
