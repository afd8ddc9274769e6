//! Authentication repository backed by the backend's REST login endpoint
//!
//! One request per attempt. Transport errors, non-success statuses and
//! unreadable bodies all become `AuthError`s; nothing is retried here.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, error, warn};

use cs_core::domain::{AuthenticatedUser, Credentials};
use cs_core::errors::AuthError;
use cs_core::repositories::AuthRepository;
use cs_shared::AuthClientConfig;

use super::dto::{LoginRequest, UserResponse};
use crate::InfrastructureError;

/// HTTP implementation of `AuthRepository`
#[derive(Debug, Clone)]
pub struct HttpAuthRepository {
    client: reqwest::Client,
    login_url: String,
}

impl HttpAuthRepository {
    /// Create a repository for the configured backend
    pub fn new(config: &AuthClientConfig) -> Result<Self, InfrastructureError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        debug!(url = %config.login_url(), timeout_secs = config.timeout_secs, "HTTP auth repository initialized");

        Ok(Self {
            client,
            login_url: config.login_url(),
        })
    }

    /// Endpoint this repository posts to
    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Map a non-success status to an error, preferring the backend's message
    fn status_error(status: StatusCode, envelope: Option<UserResponse>) -> AuthError {
        let message = envelope
            .and_then(|response| response.message)
            .unwrap_or_else(|| format!("HTTP {}", status));

        if status.is_client_error() {
            AuthError::rejected(message)
        } else {
            AuthError::transport(message)
        }
    }
}

#[async_trait]
impl AuthRepository for HttpAuthRepository {
    async fn login(&self, credentials: &Credentials) -> Result<AuthenticatedUser, AuthError> {
        debug!(
            url = %self.login_url,
            username = %credentials.masked_username(),
            "Sending login request"
        );

        let response = self
            .client
            .post(&self.login_url)
            .json(&LoginRequest::from(credentials))
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Login request failed");
                AuthError::transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::transport(e.to_string()))?;
        let envelope = serde_json::from_str::<UserResponse>(&body);

        if !status.is_success() {
            warn!(status = %status, "Login endpoint returned an error status");
            return Err(Self::status_error(status, envelope.ok()));
        }

        envelope
            .map_err(|e| AuthError::malformed(e.to_string()))?
            .into_user()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = AuthClientConfig::new("ftp://example.com");
        assert!(matches!(
            HttpAuthRepository::new(&config),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[test]
    fn test_login_url_from_config() {
        let mut config = AuthClientConfig::new("https://api.example.com/");
        config.login_path = "/api/login".to_string();
        let repository = HttpAuthRepository::new(&config).unwrap();
        assert_eq!(repository.login_url(), "https://api.example.com/api/login");
    }

    #[test]
    fn test_status_error_mapping() {
        let rejected = HttpAuthRepository::status_error(StatusCode::UNAUTHORIZED, None);
        assert_eq!(rejected, AuthError::rejected("HTTP 401 Unauthorized"));

        let envelope = UserResponse {
            success: false,
            message: Some("maintenance".to_string()),
            user: None,
        };
        let transport =
            HttpAuthRepository::status_error(StatusCode::SERVICE_UNAVAILABLE, Some(envelope));
        assert_eq!(transport, AuthError::transport("maintenance"));
    }
}
