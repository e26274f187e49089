//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateful services shared by the screens.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{Gender, LoginRequest, LoginResponse, RegistrationRequest, Satisfaction};
pub use services::{
    DARK_MODE_KEY, PROCESS_DELAY, PreferenceStore, PressOutcome, ProcessSimulator, ProcessState,
    RecordError, RecordList, RecordManager,
};
pub use use_cases::{LoginUseCase, RegisterUseCase};
