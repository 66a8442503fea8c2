//! Role tags and role sets for access control.
//!
//! The backend hands each authenticated user exactly one role tag. Route
//! and menu visibility is decided by flat set membership against that tag:
//! there is no hierarchy, and comparison is case-sensitive and exact.

use serde::{Deserialize, Serialize, de, ser};
use std::fmt;
use std::str::FromStr;

/// A role tag assigned by the backend at login.
///
/// Decoded from the server's role string into a closed variant so
/// membership checks are exhaustive. Tags the client does not know about
/// are preserved in `Other` and never match a required role set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// School administrator.
    Admin,
    /// Teaching staff.
    Teacher,
    /// Enrolled student.
    Student,
    /// A role tag this client does not recognize.
    Other(String),
}

impl Role {
    /// Returns the role's wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "admin" => Self::Admin,
            "teacher" => Self::Teacher,
            "student" => Self::Student,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for Role {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// The set of roles permitted to see a route or navigation item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet {
    roles: Vec<Role>,
}

impl RoleSet {
    /// Creates a role set from a list of roles.
    #[must_use]
    pub fn of(roles: &[Role]) -> Self {
        Self {
            roles: roles.to_vec(),
        }
    }

    /// Creates an empty role set (matches no role).
    #[must_use]
    pub fn none() -> Self {
        Self { roles: Vec::new() }
    }

    /// Role set covering every role the client knows about.
    #[must_use]
    pub fn everyone() -> Self {
        Self::of(&[Role::Admin, Role::Teacher, Role::Student])
    }

    /// Role set covering staff (admin and teacher).
    #[must_use]
    pub fn staff() -> Self {
        Self::of(&[Role::Admin, Role::Teacher])
    }

    /// Role set containing only the administrator role.
    #[must_use]
    pub fn admin_only() -> Self {
        Self::of(&[Role::Admin])
    }

    /// Returns true if the given role is a member of this set.
    #[must_use]
    pub fn contains(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    /// Returns true if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Returns the roles as a slice.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}

impl Default for RoleSet {
    fn default() -> Self {
        Self::none()
    }
}

impl From<&[Role]> for RoleSet {
    fn from(roles: &[Role]) -> Self {
        Self::of(roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_known_tags() {
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("teacher"), Role::Teacher);
        assert_eq!(Role::from("student"), Role::Student);
    }

    #[test]
    fn role_from_unknown_tag_is_preserved() {
        let role = Role::from("librarian");
        assert_eq!(role, Role::Other("librarian".to_string()));
        assert_eq!(role.as_str(), "librarian");
    }

    #[test]
    fn role_comparison_is_case_sensitive() {
        // "Admin" is not the admin role; it is an unknown tag.
        assert_ne!(Role::from("Admin"), Role::Admin);
    }

    #[test]
    fn role_display_matches_wire_format() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::Other("clerk".to_string()).to_string(), "clerk");
    }

    #[test]
    fn role_serde_roundtrip() {
        let json = serde_json::to_string(&Role::Teacher).expect("serialize");
        assert_eq!(json, "\"teacher\"");
        let parsed: Role = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, Role::Teacher);
    }

    #[test]
    fn role_serde_unknown_tag() {
        let parsed: Role = serde_json::from_str("\"superadmin\"").expect("deserialize");
        assert_eq!(parsed, Role::Other("superadmin".to_string()));
    }

    #[test]
    fn role_set_membership() {
        let staff = RoleSet::staff();
        assert!(staff.contains(&Role::Admin));
        assert!(staff.contains(&Role::Teacher));
        assert!(!staff.contains(&Role::Student));
        assert!(!staff.contains(&Role::Other("admin2".to_string())));
    }

    #[test]
    fn empty_role_set_matches_nothing() {
        let none = RoleSet::none();
        assert!(none.is_empty());
        assert!(!none.contains(&Role::Admin));
    }

    #[test]
    fn unknown_role_never_matches_known_sets() {
        let everyone = RoleSet::everyone();
        assert!(!everyone.contains(&Role::Other("guest".to_string())));
    }
}
