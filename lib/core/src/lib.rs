//! Core domain types for the slateboard school management client.
//!
//! This crate provides the foundational types shared by the session,
//! navigation, and API layers: role tags, role sets, and the string
//! identifiers handed out by the backend.

pub mod id;
pub mod role;

pub use id::{Tenant, UserId};
pub use role::{Role, RoleSet};
