//! Observable state of the current submit cycle

use tokio::sync::watch;
use tracing::debug;

use crate::domain::value_objects::{LoginOutcome, SessionPhase};

/// Phase and unconsumed outcome, kept in one channel so consumption is atomic
///
/// The phase may already be `Idle` while an outcome still waits to be taken.
#[derive(Debug, Clone, Default)]
pub(crate) struct CycleState {
    pub(crate) phase: SessionPhase,
    pub(crate) outcome: Option<LoginOutcome>,
}

impl CycleState {
    /// Leave a terminal phase for `Idle`, keeping any unconsumed outcome.
    /// Returns whether the phase changed.
    pub(crate) fn settle(&mut self) -> bool {
        if !self.phase.is_terminal() {
            return false;
        }
        self.phase = SessionPhase::Idle;
        true
    }

    /// Drop an in-flight phase that will never publish. Returns whether the phase changed.
    pub(crate) fn abandon(&mut self) -> bool {
        if self.phase != SessionPhase::Submitting {
            return false;
        }
        self.phase = SessionPhase::Idle;
        true
    }
}

/// Holds the cycle in `Submitting` for the lifetime of one submit
///
/// If the submit future is dropped before `publish`, for example when its task
/// is aborted, the cycle goes back to `Idle` instead of staying in flight.
pub(crate) struct SubmitGuard<'a> {
    cycle: &'a watch::Sender<CycleState>,
    published: bool,
}

impl<'a> SubmitGuard<'a> {
    pub(crate) fn new(cycle: &'a watch::Sender<CycleState>) -> Self {
        Self {
            cycle,
            published: false,
        }
    }

    /// Publish the outcome together with its terminal phase
    pub(crate) fn publish(mut self, outcome: LoginOutcome) {
        self.cycle.send_modify(move |cycle| {
            cycle.phase = outcome.phase();
            cycle.outcome = Some(outcome);
        });
        self.published = true;
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if !self.published && self.cycle.send_if_modified(CycleState::abandon) {
            debug!("Login attempt dropped before completing; session back to idle");
        }
    }
}

/// Receiver side of the session phase
///
/// Obtained from `LoginSession::subscribe_phase`; can be moved to and awaited
/// on whichever task owns the presentation layer.
#[derive(Debug, Clone)]
pub struct PhaseReceiver {
    inner: watch::Receiver<CycleState>,
}

impl PhaseReceiver {
    pub(crate) fn new(inner: watch::Receiver<CycleState>) -> Self {
        Self { inner }
    }

    /// Current phase without waiting
    pub fn current(&self) -> SessionPhase {
        self.inner.borrow().phase
    }

    /// Wait for the next state change and return the phase after it
    ///
    /// Returns `None` once the session has been dropped.
    pub async fn changed(&mut self) -> Option<SessionPhase> {
        self.inner.changed().await.ok()?;
        Some(self.inner.borrow_and_update().phase)
    }
}
