//! Login session coordination
//!
//! This module drives one login screen:
//! - Validates the form on every input change and publishes the result
//! - Submits credentials to the authentication repository
//! - Publishes each outcome once, for single consumption by the presentation layer

mod service;
mod state;

#[cfg(test)]
mod tests;

pub use service::LoginSession;
pub use state::PhaseReceiver;
