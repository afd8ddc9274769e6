//! # Infrastructure Layer
//!
//! Concrete implementations behind the core login flow:
//! - **HTTP**: `AuthRepository` backed by the authentication REST endpoint (reqwest)
//! - **Bootstrap**: wiring of configuration, tracing, session and projection

// Re-export core types for convenience
pub use cs_core::errors::*;

/// HTTP module - authentication backend client and wire DTOs
pub mod http;

/// Bootstrap module - assembles the login flow from configuration
pub mod bootstrap;

pub use bootstrap::{initialize, initialize_from_env, LoginComponents};
pub use http::HttpAuthRepository;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction or request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] cs_shared::ConfigError),
}

