//! Error codes surfaced to the presentation layer and errors raised by
//! authentication collaborators.
//!
//! `ErrorCode` is data, never an `Err`: validation codes travel inside
//! `ValidationState` and the login code inside `LoginOutcome`. The text shown
//! to the user is resolved from a `MessageTable` in the projection layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-facing error codes of the login flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Username is empty, or shaped like an email but malformed
    InvalidUsername,
    /// Password is missing or too short
    InvalidPassword,
    /// The authentication attempt did not succeed
    LoginFailed,
}

impl ErrorCode {
    /// All codes, in declaration order
    pub const ALL: [ErrorCode; 3] = [
        ErrorCode::InvalidUsername,
        ErrorCode::InvalidPassword,
        ErrorCode::LoginFailed,
    ];

    /// Stable string code for programmatic handling
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidUsername => "INVALID_USERNAME",
            ErrorCode::InvalidPassword => "INVALID_PASSWORD",
            ErrorCode::LoginFailed => "LOGIN_FAILED",
        }
    }

    /// Whether the code comes from input validation (fixable by editing the form)
    pub fn is_validation(&self) -> bool {
        matches!(self, ErrorCode::InvalidUsername | ErrorCode::InvalidPassword)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown error code: {}", s))
    }
}

/// Failures reported by an authentication collaborator
///
/// The session coordinator collapses every variant into
/// `ErrorCode::LoginFailed`; the detail is only logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication rejected: {message}")]
    Rejected { message: String },

    #[error("Authentication backend unreachable: {message}")]
    Transport { message: String },

    #[error("Malformed authentication response: {message}")]
    MalformedResponse { message: String },
}

impl AuthError {
    pub fn rejected(message: impl Into<String>) -> Self {
        AuthError::Rejected { message: message.into() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        AuthError::Transport { message: message.into() }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        AuthError::MalformedResponse { message: message.into() }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;
