//! Form validation error types.

use thiserror::Error;

/// Client-side validation failures. None of these reach the user as a
/// message; the matching submit action is simply disabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{field}` is blank")]
    BlankField { field: &'static str },

    #[error("terms and conditions were not accepted")]
    TermsNotAccepted,
}

impl ValidationError {
    /// Creates blank field error.
    #[must_use]
    pub const fn blank(field: &'static str) -> Self {
        Self::BlankField { field }
    }
}
