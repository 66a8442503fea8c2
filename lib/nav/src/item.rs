//! Navigation item types.

use serde::{Deserialize, Serialize};
use slateboard_core::{Role, RoleSet};

/// A second-level navigation entry under a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSubItem {
    /// Label shown in the menu.
    pub name: String,
    /// Route the entry links to.
    pub path: String,
    /// Visibility override. When absent, the entry inherits the parent
    /// group's role set; when present, it wins over the parent's.
    pub roles: Option<RoleSet>,
}

impl NavSubItem {
    /// Creates a sub-entry that inherits its parent's visibility.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            roles: None,
        }
    }

    /// Restricts the entry to the given roles, overriding the parent.
    #[must_use]
    pub fn restricted_to(mut self, roles: &[Role]) -> Self {
        self.roles = Some(RoleSet::of(roles));
        self
    }
}

/// A top-level navigation entry: either a leaf with a path or a group
/// with sub-entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Label shown in the menu.
    pub name: String,
    /// Icon identifier for the rendering layer.
    pub icon: String,
    /// Route for leaf entries.
    pub path: Option<String>,
    /// Sub-entries for group entries.
    pub sub_items: Option<Vec<NavSubItem>>,
    /// Visibility restriction. Absence on a top-level entry means visible
    /// to all roles.
    pub roles: Option<RoleSet>,
}

impl NavItem {
    /// Creates a leaf entry visible to every role.
    #[must_use]
    pub fn leaf(name: impl Into<String>, icon: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            path: Some(path.into()),
            sub_items: None,
            roles: None,
        }
    }

    /// Creates a group entry with the given sub-entries.
    #[must_use]
    pub fn group(
        name: impl Into<String>,
        icon: impl Into<String>,
        sub_items: Vec<NavSubItem>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            path: None,
            sub_items: Some(sub_items),
            roles: None,
        }
    }

    /// Restricts the entry to the given roles.
    #[must_use]
    pub fn restricted_to(mut self, roles: &[Role]) -> Self {
        self.roles = Some(RoleSet::of(roles));
        self
    }

    /// Returns true if this entry is a group.
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.sub_items.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_has_path_and_no_children() {
        let item = NavItem::leaf("Calendar", "calendar", "/calendar");
        assert_eq!(item.path.as_deref(), Some("/calendar"));
        assert!(!item.is_group());
        assert!(item.roles.is_none());
    }

    #[test]
    fn group_has_children_and_no_path() {
        let item = NavItem::group(
            "Library",
            "library",
            vec![NavSubItem::new("View books", "/library/view")],
        );
        assert!(item.is_group());
        assert!(item.path.is_none());
    }

    #[test]
    fn restricted_to_sets_role_set() {
        let item = NavItem::leaf("Calendar", "calendar", "/calendar")
            .restricted_to(&[Role::Admin, Role::Teacher]);
        let roles = item.roles.expect("roles set");
        assert!(roles.contains(&Role::Admin));
        assert!(!roles.contains(&Role::Student));
    }

    #[test]
    fn nav_item_serde_roundtrip() {
        let item = NavItem::group(
            "Results",
            "page",
            vec![NavSubItem::new("Check Results", "/results/check")],
        )
        .restricted_to(&[Role::Admin, Role::Teacher]);
        let json = serde_json::to_string(&item).expect("serialize");
        let parsed: NavItem = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, item);
    }
}
