//! Configuration module with area-specific sub-modules
//!
//! - `client` - Authentication backend client configuration
//! - `environment` - Environment detection and logging configuration

pub mod client;
pub mod environment;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Language;

// Re-export commonly used types
pub use client::AuthClientConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Prefix for environment variable overrides (`COFFEESHOP__AUTH_CLIENT__BASE_URL`)
pub const ENV_PREFIX: &str = "COFFEESHOP";

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Authentication backend client configuration
    pub auth_client: AuthClientConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Language used for user-facing messages
    #[serde(default)]
    pub language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        let auth_client = match environment {
            Environment::Development => AuthClientConfig::default(),
            Environment::Staging | Environment::Production => AuthClientConfig {
                timeout_secs: 15,
                ..AuthClientConfig::default()
            },
        };

        Self {
            environment,
            auth_client,
            logging: LoggingConfig::for_environment(environment),
            language: Language::default(),
        }
    }

    /// Load configuration from defaults, the environment's config file and env variables
    ///
    /// Layers, lowest precedence first:
    /// 1. Built-in defaults for the detected environment
    /// 2. Optional `config.<environment>.toml` in the working directory
    /// 3. `COFFEESHOP__*` environment variables (`__` separates nested keys)
    ///
    /// A `.env` file, if present, is loaded before the environment is detected.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        let defaults = ::config::Config::try_from(&Self::for_environment(environment))?;

        let settings = ::config::Config::builder()
            .add_source(defaults)
            .add_source(::config::File::with_name(environment.config_file()).required(false))
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Validate cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth_client.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const OVERRIDES: [&str; 2] = ["COFFEESHOP__AUTH_CLIENT__BASE_URL", "COFFEESHOP__LANGUAGE"];

    fn clear_overrides() {
        for key in OVERRIDES {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.language, Language::English);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_defaults() {
        let config = AppConfig::for_environment(Environment::Production);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.auth_client.timeout_secs, 15);
    }

    #[test]
    fn test_invalid_client_config_is_rejected() {
        let mut config = AppConfig::default();
        config.auth_client.base_url = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { ref field, .. }) if field == "auth_client.base_url"
        ));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let json = r#"{
            "environment": "staging",
            "auth_client": { "base_url": "https://api.example.com" }
        }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.auth_client.login_path, "/login");
        assert_eq!(config.language, Language::English);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    #[serial]
    fn test_load_applies_env_overrides() {
        std::env::set_var("COFFEESHOP__AUTH_CLIENT__BASE_URL", "https://auth.example.com");
        std::env::set_var("COFFEESHOP__LANGUAGE", "pt");

        let loaded = AppConfig::load();
        clear_overrides();

        let config = loaded.unwrap();
        assert_eq!(config.auth_client.base_url, "https://auth.example.com");
        assert_eq!(config.auth_client.login_path, "/login");
        assert_eq!(config.language, Language::Portuguese);
    }

    #[test]
    #[serial]
    fn test_load_rejects_invalid_env_override() {
        std::env::set_var("COFFEESHOP__AUTH_CLIENT__BASE_URL", "ftp://x");

        let loaded = AppConfig::load();
        clear_overrides();

        assert!(matches!(
            loaded,
            Err(ConfigError::Invalid { ref field, .. }) if field == "auth_client.base_url"
        ));
    }
}
