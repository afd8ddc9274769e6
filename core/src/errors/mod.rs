//! Domain-specific error types and error codes.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, AuthResult, ErrorCode};
