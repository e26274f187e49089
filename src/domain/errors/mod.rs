//! Domain error types.

mod store_error;
mod validation_error;

pub use store_error::{PreferenceError, StoreError};
pub use validation_error::ValidationError;
