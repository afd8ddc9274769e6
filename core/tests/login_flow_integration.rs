//! Integration tests for the login flow: validation, submit and projection

use std::sync::Arc;

use cs_core::domain::{AuthenticatedUser, DisplayResult, LoginOutcome, SessionPhase};
use cs_core::errors::{AuthError, ErrorCode};
use cs_core::repositories::MockAuthRepository;
use cs_core::services::{LoginSession, MessageTable, ResultProjection};
use cs_shared::Language;

fn alice() -> AuthenticatedUser {
    AuthenticatedUser::new(1, "Alice")
        .with_email("alice@example.com")
        .with_username("alice")
        .with_phone("555-0100")
        .with_address("1 Bean St")
}

#[tokio::test]
async fn test_successful_login_flow() {
    let repository = Arc::new(MockAuthRepository::succeeding(alice()));
    let session = LoginSession::new(Arc::clone(&repository));
    let projection = ResultProjection::new(MessageTable::for_language(Language::English));

    // Typing: first keystrokes are invalid, the final form is valid
    let partial = session.on_input_changed("alice", "sec");
    assert_eq!(
        projection.field_errors(&partial).password.as_deref(),
        Some("Password must be >5 characters")
    );
    assert!(!session.can_submit());

    session.on_input_changed("alice", "secret1");
    assert!(session.can_submit());

    let outcome = session.submit("alice", "secret1").await;
    assert_eq!(outcome, LoginOutcome::Success(alice()));

    let consumed = session.take_outcome().expect("outcome should be waiting");
    assert_eq!(session.phase(), SessionPhase::Idle);

    match projection.project(consumed) {
        DisplayResult::Welcome {
            welcome_text,
            navigation,
        } => {
            assert_eq!(welcome_text, "Welcome, Alice");
            let extras = navigation.to_extras();
            assert_eq!(extras["USER_ID"], 1);
            assert_eq!(extras["USER_PHONE"], "555-0100");
            assert_eq!(extras["USER_ADDRESS"], "1 Bean St");
        }
        other => panic!("expected welcome, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_login_flow_then_retry_by_user() {
    let repository = Arc::new(
        MockAuthRepository::succeeding(alice()).then(Err(AuthError::rejected("invalid credentials"))),
    );
    let session = LoginSession::new(Arc::clone(&repository));
    let projection = ResultProjection::new(MessageTable::portuguese());

    session.on_input_changed("alice@example.com", "wrong-pass");
    let outcome = session.submit("alice@example.com", "wrong-pass").await;
    assert_eq!(outcome, LoginOutcome::Failure(ErrorCode::LoginFailed));
    assert_eq!(repository.call_count(), 1);

    let shown = projection.project(session.take_outcome().expect("failure should be waiting"));
    assert_eq!(
        shown,
        DisplayResult::Error {
            code: ErrorCode::LoginFailed,
            error_message: "Falha no login".to_string(),
        }
    );

    // The user corrects the password and submits again explicitly
    session.on_input_changed("alice@example.com", "secret1");
    let retried = session.submit("alice@example.com", "secret1").await;
    assert!(retried.is_success());
    assert_eq!(repository.call_count(), 2);
}

#[tokio::test]
async fn test_spawned_submit_is_observed_once() {
    let repository = Arc::new(MockAuthRepository::succeeding(alice()));
    let session = Arc::new(LoginSession::new(repository));

    let handle = session.spawn_submit("alice", "secret1");
    let observed = session.next_outcome().await;

    assert_eq!(observed.as_ref().and_then(|o| o.user()).map(|u| u.id), Some(1));
    assert!(handle.await.unwrap().is_success());
    assert!(session.take_outcome().is_none());
}
