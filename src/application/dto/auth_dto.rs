//! Authentication and registration DTOs.

use crate::domain::entities::Session;

/// Login form data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// Username as typed.
    pub username: String,
    /// Password as typed. Never checked against stored credentials.
    pub password: String,
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Whether the submit action is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.trim().is_empty()
    }
}

/// Login response data.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    /// The opened session.
    pub session: Session,
}

impl LoginResponse {
    /// Creates new login response.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

/// Gender choice offered by the extended registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Unspecified,
    Female,
    Male,
    Other,
}

impl Gender {
    /// Cycles to the next option.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Unspecified => Self::Female,
            Self::Female => Self::Male,
            Self::Male => Self::Other,
            Self::Other => Self::Unspecified,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unspecified => "Prefiero no decirlo",
            Self::Female => "Femenino",
            Self::Male => "Masculino",
            Self::Other => "Otro",
        }
    }
}

/// Satisfaction score between 1 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Satisfaction(u8);

impl Satisfaction {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a score, clamped to `1..=5`.
    #[must_use]
    pub fn new(score: u8) -> Self {
        Self(score.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub const fn score(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn increase(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    #[must_use]
    pub fn decrease(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for Satisfaction {
    fn default() -> Self {
        Self(3)
    }
}

/// Registration form data.
///
/// Only name, password and terms gate the submit action. The remaining
/// fields are captured for display and never validated or stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationRequest {
    pub name: String,
    pub password: String,
    pub terms_accepted: bool,
    pub gender: Gender,
    pub notifications: bool,
    pub satisfaction: Satisfaction,
}

impl RegistrationRequest {
    /// Creates a request with the required fields only.
    #[must_use]
    pub fn new(name: impl Into<String>, password: impl Into<String>, terms_accepted: bool) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            terms_accepted,
            ..Self::default()
        }
    }

    /// Whether the continue action is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && !self.password.trim().is_empty() && self.terms_accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfaction_clamped() {
        assert_eq!(Satisfaction::new(0).score(), 1);
        assert_eq!(Satisfaction::new(9).score(), 5);
        assert_eq!(Satisfaction::new(5).increase().score(), 5);
        assert_eq!(Satisfaction::new(1).decrease().score(), 1);
        assert_eq!(Satisfaction::default().score(), 3);
    }

    #[test]
    fn test_gender_cycles() {
        let mut gender = Gender::default();
        for _ in 0..4 {
            gender = gender.next();
        }
        assert_eq!(gender, Gender::Unspecified);
    }

    #[test]
    fn test_optional_fields_do_not_gate_submit() {
        let mut request = RegistrationRequest::new("Ana", "secreto", true);
        request.notifications = false;
        request.gender = Gender::Other;
        request.satisfaction = Satisfaction::new(1);
        assert!(request.can_submit());
    }
}
