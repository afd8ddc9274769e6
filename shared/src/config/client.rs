//! Authentication backend client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ConfigError;

/// Connection settings for the authentication backend
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthClientConfig {
    /// Base URL of the backend, scheme included (e.g. `https://api.example.com`)
    pub base_url: String,

    /// Path of the login endpoint relative to `base_url`
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AuthClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:3000"),
            login_path: default_login_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AuthClientConfig {
    /// Create a configuration pointing at `base_url` with default path and timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the login endpoint
    pub fn login_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.login_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "auth_client.base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                field: "auth_client.base_url".to_string(),
                reason: "must start with http:// or https://".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "auth_client.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn default_login_path() -> String {
    String::from("/login")
}

fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_url_joins_slashes() {
        let mut config = AuthClientConfig::new("https://api.example.com/");
        assert_eq!(config.login_url(), "https://api.example.com/login");

        config.login_path = "api/v1/login".to_string();
        assert_eq!(config.login_url(), "https://api.example.com/api/v1/login");
    }

    #[test]
    fn test_validate_rejects_missing_scheme() {
        let config = AuthClientConfig::new("api.example.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = AuthClientConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AuthClientConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
