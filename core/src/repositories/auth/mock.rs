//! Scripted implementation of AuthRepository for tests and previews

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};

use crate::domain::entities::AuthenticatedUser;
use crate::domain::value_objects::Credentials;
use crate::errors::{AuthError, AuthResult};

use super::AuthRepository;

/// Mock authentication repository
///
/// Answers from a queue of scripted responses; once the queue is drained the
/// fallback response is repeated. Optionally holds every call until the gate
/// is opened, which lets tests observe the in-flight phase.
pub struct MockAuthRepository {
    scripted: Mutex<VecDeque<AuthResult<AuthenticatedUser>>>,
    fallback: AuthResult<AuthenticatedUser>,
    calls: AtomicUsize,
    last_credentials: Mutex<Option<Credentials>>,
    gate: Option<Arc<Notify>>,
}

impl MockAuthRepository {
    fn with_fallback(fallback: AuthResult<AuthenticatedUser>) -> Self {
        Self {
            scripted: Mutex::new(VecDeque::new()),
            fallback,
            calls: AtomicUsize::new(0),
            last_credentials: Mutex::new(None),
            gate: None,
        }
    }

    /// Repository that accepts any credentials and returns `user`
    pub fn succeeding(user: AuthenticatedUser) -> Self {
        Self::with_fallback(Ok(user))
    }

    /// Repository that fails every attempt with `error`
    pub fn failing(error: AuthError) -> Self {
        Self::with_fallback(Err(error))
    }

    /// Queue a response to be returned before the fallback
    pub fn then(mut self, response: AuthResult<AuthenticatedUser>) -> Self {
        self.scripted.get_mut().push_back(response);
        self
    }

    /// Hold each call until the returned gate is notified once per call
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    /// Number of login calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Credentials of the most recent call
    pub async fn last_credentials(&self) -> Option<Credentials> {
        self.last_credentials.lock().await.clone()
    }
}

#[async_trait]
impl AuthRepository for MockAuthRepository {
    async fn login(&self, credentials: &Credentials) -> Result<AuthenticatedUser, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_credentials.lock().await = Some(credentials.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let next = self.scripted.lock().await.pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }
}
