pub mod preference_store;
pub mod process_simulator;
pub mod record_manager;

pub use preference_store::{DARK_MODE_KEY, PreferenceStore};
pub use process_simulator::{PROCESS_DELAY, PressOutcome, ProcessSimulator, ProcessState};
pub use record_manager::{RecordError, RecordList, RecordManager};
