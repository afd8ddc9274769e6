//! # CoffeeShop Core
//!
//! Core login logic for the CoffeeShop application.
//! This crate contains the domain entities and value objects of a login attempt,
//! the authentication repository interface, and the three services that make up
//! the login flow: credential validation, session coordination and result projection.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::*;
pub use errors::*;
