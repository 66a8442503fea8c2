//! String-newtype identifiers handed out by the backend.
//!
//! The server issues opaque identifiers (employee/student ids, tenant
//! partition names). They are kept as strings and wrapped so the session
//! and API layers cannot mix them up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate a newtype wrapper around an opaque server-issued string.
macro_rules! define_string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from a string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

define_string_id!(
    /// Unique identifier for a user (employee or student id).
    UserId
);

define_string_id!(
    /// Organization partition identifier; scopes all data access to one school.
    Tenant
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_display() {
        let id = UserId::new("EMP-1042");
        assert_eq!(id.to_string(), "EMP-1042");
    }

    #[test]
    fn tenant_from_str() {
        let tenant: Tenant = "school-123".into();
        assert_eq!(tenant.as_str(), "school-123");
    }

    #[test]
    fn id_serde_is_transparent() {
        let id = UserId::new("S-77");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"S-77\"");
        let parsed: UserId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, id);
    }
}
