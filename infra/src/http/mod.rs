//! HTTP integration with the authentication backend

pub mod auth_repository;
pub mod dto;

pub use auth_repository::HttpAuthRepository;
pub use dto::{LoginRequest, UserResponse};
