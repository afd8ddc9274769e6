//! Result projection
//!
//! Turns login outcomes and form validation into display-ready data using an
//! explicit error-code-to-message table.

mod messages;
mod service;

pub use messages::{CatalogError, MessageTable};
pub use service::ResultProjection;
