//! Login use case implementation.

use tracing::{debug, info};

use crate::application::dto::{LoginRequest, LoginResponse};
use crate::domain::entities::{Session, Username};
use crate::domain::errors::ValidationError;

/// Opens a session from the login form.
///
/// Any non-blank password is accepted; there is no credential store.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginUseCase;

impl LoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes login with provided request.
    ///
    /// # Errors
    /// Returns [`ValidationError::BlankField`] when username or password is blank.
    pub fn execute(&self, request: LoginRequest) -> Result<LoginResponse, ValidationError> {
        debug!("Attempting login");

        if request.password.trim().is_empty() {
            return Err(ValidationError::blank("password"));
        }

        let username =
            Username::new(request.username).ok_or(ValidationError::blank("username"))?;

        info!(username = %username, "Session opened");
        Ok(LoginResponse::new(Session::new(username)))
    }
}
