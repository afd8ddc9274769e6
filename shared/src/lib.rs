//! Shared utilities and common types for the CoffeeShop login flow
//!
//! This crate provides common functionality used across all workspace crates:
//! - Configuration types and loading
//! - Language selection for user-facing messages
//! - Tracing subscriber initialisation
//! - Utility functions (input validators, log masking)

pub mod config;
pub mod telemetry;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthClientConfig, ConfigError, Environment, LogFormat, LoggingConfig,
};
pub use types::Language;
pub use utils::{masking, validation};
