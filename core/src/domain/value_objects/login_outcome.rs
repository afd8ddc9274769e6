//! Terminal result of one login attempt and the phases of a submit cycle.

use serde::{Deserialize, Serialize};

use crate::domain::entities::AuthenticatedUser;
use crate::errors::ErrorCode;

/// Outcome of a single submit
///
/// Produced once per `submit` call and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum LoginOutcome {
    Success(AuthenticatedUser),
    Failure(ErrorCode),
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success(_))
    }

    /// Authenticated user, if the attempt succeeded
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            LoginOutcome::Success(user) => Some(user),
            LoginOutcome::Failure(_) => None,
        }
    }

    /// Error code, if the attempt failed
    pub fn error(&self) -> Option<ErrorCode> {
        match self {
            LoginOutcome::Success(_) => None,
            LoginOutcome::Failure(code) => Some(*code),
        }
    }

    /// Phase the session enters once this outcome is published
    pub fn phase(&self) -> SessionPhase {
        match self {
            LoginOutcome::Success(_) => SessionPhase::Succeeded,
            LoginOutcome::Failure(_) => SessionPhase::Failed,
        }
    }
}

/// Phase of the current submit cycle
///
/// `Idle -> Submitting -> {Succeeded, Failed} -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SessionPhase {
    /// Whether an outcome is waiting to be consumed
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::Succeeded | SessionPhase::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let outcome = LoginOutcome::Success(AuthenticatedUser::new(1, "Alice"));
        assert!(outcome.is_success());
        assert_eq!(outcome.user().map(|u| u.id), Some(1));
        assert_eq!(outcome.error(), None);
        assert_eq!(outcome.phase(), SessionPhase::Succeeded);
    }

    #[test]
    fn test_failure_accessors() {
        let outcome = LoginOutcome::Failure(ErrorCode::LoginFailed);
        assert!(!outcome.is_success());
        assert!(outcome.user().is_none());
        assert_eq!(outcome.error(), Some(ErrorCode::LoginFailed));
        assert_eq!(outcome.phase(), SessionPhase::Failed);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!SessionPhase::Idle.is_terminal());
        assert!(!SessionPhase::Submitting.is_terminal());
        assert!(SessionPhase::Succeeded.is_terminal());
        assert!(SessionPhase::Failed.is_terminal());
    }

    #[test]
    fn test_outcome_serialization_is_tagged() {
        let json = serde_json::to_value(LoginOutcome::Failure(ErrorCode::LoginFailed)).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["data"], "LOGIN_FAILED");
    }
}
