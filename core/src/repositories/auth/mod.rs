//! Authentication repository module.

mod r#trait;
pub use r#trait::AuthRepository;

mod mock;
pub use mock::MockAuthRepository;
