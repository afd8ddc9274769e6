//! Business services of the login flow.

pub mod projection;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use projection::{CatalogError, MessageTable, ResultProjection};
pub use session::LoginSession;
pub use validation::{is_password_valid, is_username_valid, validate, MIN_PASSWORD_LENGTH};
