pub mod auth;

pub use auth::{AuthRepository, MockAuthRepository};
