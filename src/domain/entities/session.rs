//! Authenticated session value objects.

use std::fmt;

/// Login name of a shopper.
///
/// Only blankness is checked; the value is kept exactly as typed so the
/// home screen greets the user with what they entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Creates a username, rejecting blank input.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Returns the username as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Process-local session created by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: Username,
}

impl Session {
    /// Opens a session for the given user.
    #[must_use]
    pub const fn new(username: Username) -> Self {
        Self { username }
    }

    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Consumes the session, keeping only the username.
    #[must_use]
    pub fn into_username(self) -> Username {
        self.username
    }
}
