//! Result of validating the login form.

use serde::{Deserialize, Serialize};

use crate::errors::ErrorCode;

/// Per-field validation result of the login form
///
/// Validity is derived from the error fields, so `is_valid()` is true exactly
/// when neither field carries an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationState {
    username_error: Option<ErrorCode>,
    password_error: Option<ErrorCode>,
}

impl ValidationState {
    pub fn new(username_error: Option<ErrorCode>, password_error: Option<ErrorCode>) -> Self {
        Self {
            username_error,
            password_error,
        }
    }

    /// State of a form with no errors
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn username_error(&self) -> Option<ErrorCode> {
        self.username_error
    }

    pub fn password_error(&self) -> Option<ErrorCode> {
        self.password_error
    }

    /// Whether the form may be submitted
    pub fn is_valid(&self) -> bool {
        self.username_error.is_none() && self.password_error.is_none()
    }

    /// Errors present, username first
    pub fn errors(&self) -> impl Iterator<Item = ErrorCode> {
        self.username_error.into_iter().chain(self.password_error)
    }
}
