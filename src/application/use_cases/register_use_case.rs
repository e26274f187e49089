//! Registration use case implementation.

use tracing::{debug, info};

use crate::application::dto::RegistrationRequest;
use crate::domain::errors::ValidationError;

/// Client-side gate for the registration form. Nothing is persisted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterUseCase;

impl RegisterUseCase {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Checks the required fields.
    ///
    /// # Errors
    /// Returns the first failing rule: blank name, blank password, then terms.
    pub fn execute(&self, request: &RegistrationRequest) -> Result<(), ValidationError> {
        if request.name.trim().is_empty() {
            return Err(ValidationError::blank("name"));
        }
        if request.password.trim().is_empty() {
            return Err(ValidationError::blank("password"));
        }
        if !request.terms_accepted {
            debug!("Terms not accepted");
            return Err(ValidationError::TermsNotAccepted);
        }

        info!(
            gender = request.gender.label(),
            notifications = request.notifications,
            satisfaction = request.satisfaction.score(),
            "Registration form accepted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Ana", "clave", true, true ; "all_set")]
    #[test_case("", "clave", true, false ; "blank_name")]
    #[test_case("Ana", "  ", true, false ; "blank_password")]
    #[test_case("Ana", "clave", false, false ; "terms_missing")]
    #[test_case(" ", "", false, false ; "nothing_set")]
    fn test_submit_enabled_iff_required_fields(
        name: &str,
        password: &str,
        terms: bool,
        expected: bool,
    ) {
        let request = RegistrationRequest::new(name, password, terms);
        assert_eq!(request.can_submit(), expected);
        assert_eq!(RegisterUseCase::new().execute(&request).is_ok(), expected);
    }

    #[test]
    fn test_terms_error() {
        let request = RegistrationRequest::new("Ana", "clave", false);
        assert_eq!(
            RegisterUseCase::new().execute(&request),
            Err(ValidationError::TermsNotAccepted)
        );
    }
}
