//! Login session coordinator implementation

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::value_objects::{Credentials, LoginOutcome, SessionPhase, ValidationState};
use crate::errors::ErrorCode;
use crate::repositories::AuthRepository;
use crate::services::validation;

use super::state::{CycleState, PhaseReceiver, SubmitGuard};

/// Coordinator for one login screen
///
/// Holds the latest form validation and the latest unconsumed outcome. The
/// coordinator is the only writer; any number of observers may read through
/// `watch` receivers, from any task or thread.
///
/// One submit in flight at a time is the supported usage. A second submit
/// while one is pending is not de-duplicated: both run, a warning is logged,
/// and the last one to finish owns the published outcome.
pub struct LoginSession<A>
where
    A: AuthRepository,
{
    /// Authentication collaborator
    repository: Arc<A>,
    /// Latest form validation
    form_state: watch::Sender<ValidationState>,
    /// Phase and outcome of the current submit cycle
    cycle: watch::Sender<CycleState>,
}

impl<A> LoginSession<A>
where
    A: AuthRepository,
{
    /// Create a new login session
    ///
    /// The form starts out invalid (nothing typed yet) and the phase `Idle`.
    pub fn new(repository: Arc<A>) -> Self {
        let (form_state, _) = watch::channel(validation::validate("", ""));
        let (cycle, _) = watch::channel(CycleState::default());

        Self {
            repository,
            form_state,
            cycle,
        }
    }

    /// Re-validate the form after the user edited either field
    ///
    /// Publishes the new state to form observers. A finished submit cycle moves
    /// back to `Idle`; an outcome nobody consumed yet stays available to
    /// `take_outcome` until the next submit.
    pub fn on_input_changed(&self, username: &str, password: &str) -> ValidationState {
        let state = validation::validate(username, password);
        self.form_state.send_replace(state);

        if self.cycle.send_if_modified(CycleState::settle) {
            debug!("Input changed after a finished attempt; session back to idle");
        }

        debug!(
            username_error = ?state.username_error(),
            password_error = ?state.password_error(),
            is_valid = state.is_valid(),
            "Login form validated"
        );
        state
    }

    /// Submit credentials to the authentication repository
    ///
    /// Validity is not re-checked here; gate the submit action on
    /// `can_submit()`. Produces exactly one outcome and never retries.
    /// Failure detail is logged and collapsed into `ErrorCode::LoginFailed`.
    pub async fn submit(&self, username: &str, password: &str) -> LoginOutcome {
        let mut overlapping = false;
        self.cycle.send_modify(|cycle| {
            overlapping = cycle.phase == SessionPhase::Submitting;
            cycle.phase = SessionPhase::Submitting;
            cycle.outcome = None;
        });
        let guard = SubmitGuard::new(&self.cycle);

        let credentials = Credentials::new(username, password);
        if overlapping {
            warn!(
                username = %credentials.masked_username(),
                "Login submitted while another attempt is in flight"
            );
        }
        info!(username = %credentials.masked_username(), "Submitting login");

        let outcome = match self.repository.login(&credentials).await {
            Ok(user) => {
                info!(user_id = user.id, "Login succeeded");
                LoginOutcome::Success(user)
            }
            Err(error) => {
                warn!(
                    username = %credentials.masked_username(),
                    error = %error,
                    "Login failed"
                );
                LoginOutcome::Failure(ErrorCode::LoginFailed)
            }
        };

        guard.publish(outcome.clone());

        outcome
    }

    /// Take the finished outcome, at most once
    ///
    /// Moves the session back to `Idle`. Returns `None` when no outcome is
    /// waiting, including when another consumer already took it.
    pub fn take_outcome(&self) -> Option<LoginOutcome> {
        let mut taken = None;
        self.cycle.send_if_modified(|cycle| match cycle.outcome.take() {
            Some(outcome) => {
                cycle.phase = SessionPhase::Idle;
                taken = Some(outcome);
                true
            }
            None => false,
        });

        if taken.is_some() {
            debug!("Login outcome consumed");
        }
        taken
    }

    /// Wait until an outcome is available and take it
    ///
    /// Safe to await from the presentation task while the submit runs
    /// elsewhere. Returns `None` only if the session is dropped while waiting.
    pub async fn next_outcome(&self) -> Option<LoginOutcome> {
        let mut receiver = self.cycle.subscribe();
        loop {
            if let Some(outcome) = self.take_outcome() {
                return Some(outcome);
            }
            receiver.changed().await.ok()?;
        }
    }

    /// Whether the latest form state allows submitting
    pub fn can_submit(&self) -> bool {
        self.form_state.borrow().is_valid()
    }

    /// Latest form validation
    pub fn form_state(&self) -> ValidationState {
        *self.form_state.borrow()
    }

    /// Current submit cycle phase
    pub fn phase(&self) -> SessionPhase {
        self.cycle.borrow().phase
    }

    /// Observe form validation changes
    pub fn subscribe_form_state(&self) -> watch::Receiver<ValidationState> {
        self.form_state.subscribe()
    }

    /// Observe submit cycle phase changes
    pub fn subscribe_phase(&self) -> PhaseReceiver {
        PhaseReceiver::new(self.cycle.subscribe())
    }
}

impl<A> LoginSession<A>
where
    A: AuthRepository + 'static,
{
    /// Submit on the tokio runtime without waiting for the result
    ///
    /// The outcome is published to observers like any other submit and is
    /// also returned by the join handle.
    pub fn spawn_submit(
        self: &Arc<Self>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> JoinHandle<LoginOutcome> {
        let session = Arc::clone(self);
        let username = username.into();
        let password = password.into();

        tokio::spawn(async move { session.submit(&username, &password).await })
    }
}
