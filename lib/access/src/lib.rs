//! Session storage, token validation, and route guarding for slateboard.
//!
//! This crate provides:
//! - The tab-scoped session abstraction (`Session`, `SessionStore`)
//! - Bearer-token expiry checking (`Claims`, `is_expired`)
//! - The route-guard decision function (`RouteAccess`, `evaluate`)
//!
//! # Access Control Model
//!
//! The backend issues a bearer token and a single role tag at login. The
//! client stores both in tab-scoped session storage and gates every route,
//! menu entry, and API call on them. Token expiry is a client-side UX
//! check only, never a security boundary; the server re-validates every
//! request.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use slateboard_access::{MemoryStore, RouteAccess, Session, SessionFields, evaluate};
//! use slateboard_core::{Role, RoleSet};
//!
//! let session = Session::new(Arc::new(MemoryStore::default()));
//!
//! // Before login every guarded route redirects to sign-in.
//! assert_eq!(evaluate(&session, &RoleSet::staff()), RouteAccess::SignInRequired);
//!
//! session.establish(SessionFields {
//!     token: "header.payload.signature".to_string(),
//!     tenant: "school-123".into(),
//!     user_id: "EMP-1".into(),
//!     user_name: "A. Teacher".to_string(),
//!     role: Role::Teacher,
//! });
//!
//! assert_eq!(evaluate(&session, &RoleSet::staff()), RouteAccess::Granted);
//! assert_eq!(evaluate(&session, &RoleSet::admin_only()), RouteAccess::Forbidden);
//! ```

pub mod error;
pub mod guard;
pub mod session;
pub mod store;
pub mod token;

// Re-export main types at crate root
pub use error::TokenError;
pub use guard::{RouteAccess, evaluate};
pub use session::{Session, SessionFields};
pub use store::{MemoryStore, SessionStore};
pub use token::{Claims, is_expired};
