//! Value objects representing immutable domain concepts.

pub mod credentials;
pub mod display;
pub mod login_outcome;
pub mod validation_state;

// Re-export commonly used types
pub use credentials::Credentials;
pub use display::{DisplayResult, FieldErrors, NavigationPayload};
pub use login_outcome::{LoginOutcome, SessionPhase};
pub use validation_state::ValidationState;
