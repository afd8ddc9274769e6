//! Credential validation
//!
//! Pure checks run on every keystroke before any network call:
//! - Username must be non-empty after trimming
//! - A username containing `@` must be a well-formed email address
//! - Password must have more than five characters after trimming

mod validator;


pub use validator::{is_password_valid, is_username_valid, validate, MIN_PASSWORD_LENGTH};
