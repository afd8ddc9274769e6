//! Authentication repository trait defining the interface to the backend
//! that verifies credentials.

use async_trait::async_trait;

use crate::domain::entities::AuthenticatedUser;
use crate::domain::value_objects::Credentials;
use crate::errors::AuthError;

/// Collaborator that verifies credentials against the authentication backend
///
/// Implementations own the wire format and transport. They must not retry:
/// one call is one attempt, and the caller decides whether to submit again.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use cs_core::repositories::AuthRepository;
/// use cs_core::domain::{AuthenticatedUser, Credentials};
/// use cs_core::errors::AuthError;
///
/// struct StaticAuthRepository;
///
/// #[async_trait]
/// impl AuthRepository for StaticAuthRepository {
///     async fn login(&self, credentials: &Credentials) -> Result<AuthenticatedUser, AuthError> {
///         if credentials.password() == "secret1" {
///             Ok(AuthenticatedUser::new(1, credentials.username()))
///         } else {
///             Err(AuthError::rejected("invalid credentials"))
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Authenticate with the given credentials
    ///
    /// # Returns
    /// * `Ok(AuthenticatedUser)` - Backend accepted the credentials
    /// * `Err(AuthError)` - Rejected, unreachable, or unreadable response
    async fn login(&self, credentials: &Credentials) -> Result<AuthenticatedUser, AuthError>;
}
