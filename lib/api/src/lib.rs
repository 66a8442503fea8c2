//! REST gateway client and login flow for slateboard.
//!
//! This crate provides:
//! - The gateway client every data fetch goes through (`ApiClient`),
//!   which attaches the bearer and tenant headers and converts an expired
//!   token into a typed rejection instead of a request
//! - Client configuration (`ApiConfig`)
//! - The credential exchange that establishes a session (`AuthService`)
//!
//! The gateway never performs navigation itself. It returns
//! `Err(ApiError::SessionExpired)` after clearing the session and leaves
//! the redirect to a single top-level handler in the UI layer.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;

// Re-export main types at crate root
pub use auth::{AuthService, Credentials, LoginError, LoginResponse};
pub use client::{ApiClient, AuthHeaders};
pub use config::ApiConfig;
pub use error::ApiError;
