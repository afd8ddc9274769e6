//! Common utility functions

pub mod masking;
pub mod validation;

// Re-export commonly used utilities
pub use masking::mask_identifier;
pub use validation::validators;
