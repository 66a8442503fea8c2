//! Role-based filtering of the navigation tree.

use slateboard_core::{Role, RoleSet};

use crate::item::{NavItem, NavSubItem};

/// Filters the static navigation tree down to the entries visible to the
/// current role.
///
/// Pure function of `(items, role)`: same inputs always yield the same
/// output, independent of render order or prior UI state.
///
/// Rules:
/// - A top-level entry with no `roles` is visible to everyone; one with
///   `roles` requires the current role to be a member.
/// - A sub-entry with its own `roles` uses that set (the override wins);
///   otherwise it inherits the parent group's `roles`.
/// - A group whose sub-entries all filter out is omitted entirely, even
///   when the group itself passed its role check.
/// - With no current role, only unrestricted leaves survive; every group
///   collapses because no sub-entry can pass a role check.
#[must_use]
pub fn filter_nav(items: &[NavItem], role: Option<&Role>) -> Vec<NavItem> {
    items
        .iter()
        .filter_map(|item| {
            if let Some(required) = &item.roles {
                match role {
                    Some(role) if required.contains(role) => {}
                    _ => return None,
                }
            }

            match &item.sub_items {
                Some(subs) => {
                    let kept = filter_sub_items(subs, item.roles.as_ref(), role);
                    if kept.is_empty() {
                        // A heading with no children is not shown.
                        None
                    } else {
                        let mut filtered = item.clone();
                        filtered.sub_items = Some(kept);
                        Some(filtered)
                    }
                }
                None => Some(item.clone()),
            }
        })
        .collect()
}

fn filter_sub_items(
    subs: &[NavSubItem],
    parent_roles: Option<&RoleSet>,
    role: Option<&Role>,
) -> Vec<NavSubItem> {
    let Some(role) = role else {
        return Vec::new();
    };

    subs.iter()
        .filter(|sub| match &sub.roles {
            Some(own) => own.contains(role),
            None => parent_roles.is_none_or(|parent| parent.contains(role)),
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A small tree mirroring the shape of the real sidebar: an all-roles
    /// group with a staff-only sub-entry override, a staff-only group,
    /// and an unrestricted leaf.
    fn sample_tree() -> Vec<NavItem> {
        vec![
            NavItem::group(
                "Library",
                "library",
                vec![
                    NavSubItem::new("Issue books", "/library/issue"),
                    NavSubItem::new("View books", "/library/view"),
                    NavSubItem::new("Add books", "/library/add")
                        .restricted_to(&[Role::Admin, Role::Teacher]),
                ],
            )
            .restricted_to(&[Role::Admin, Role::Teacher, Role::Student]),
            NavItem::group(
                "Register",
                "register",
                vec![
                    NavSubItem::new("Add Student", "/register/student"),
                    NavSubItem::new("Add Teacher", "/register/teacher")
                        .restricted_to(&[Role::Admin]),
                ],
            )
            .restricted_to(&[Role::Admin, Role::Teacher]),
            NavItem::leaf("Calendar", "calendar", "/calendar"),
        ]
    }

    fn names(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    fn sub_names(item: &NavItem) -> Vec<&str> {
        item.sub_items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|s| s.name.as_str())
            .collect()
    }

    #[test]
    fn admin_sees_everything() {
        let filtered = filter_nav(&sample_tree(), Some(&Role::Admin));
        assert_eq!(names(&filtered), vec!["Library", "Register", "Calendar"]);
        assert_eq!(
            sub_names(&filtered[0]),
            vec!["Issue books", "View books", "Add books"]
        );
        assert_eq!(sub_names(&filtered[1]), vec!["Add Student", "Add Teacher"]);
    }

    #[test]
    fn student_loses_staff_entries() {
        let filtered = filter_nav(&sample_tree(), Some(&Role::Student));
        assert_eq!(names(&filtered), vec!["Library", "Calendar"]);
        // Sub-entry override hides "Add books" even though the group is
        // visible to students.
        assert_eq!(sub_names(&filtered[0]), vec!["Issue books", "View books"]);
    }

    #[test]
    fn sub_item_override_wins_over_parent() {
        let filtered = filter_nav(&sample_tree(), Some(&Role::Teacher));
        let register = &filtered[1];
        assert_eq!(register.name, "Register");
        // Teacher passes the group check but not the "Add Teacher" override.
        assert_eq!(sub_names(register), vec!["Add Student"]);
    }

    #[test]
    fn group_with_no_visible_children_is_suppressed() {
        let tree = vec![
            NavItem::group(
                "Admin tools",
                "tools",
                vec![NavSubItem::new("Audit", "/audit").restricted_to(&[Role::Admin])],
            )
            .restricted_to(&[Role::Admin, Role::Teacher]),
        ];
        let filtered = filter_nav(&tree, Some(&Role::Teacher));
        assert!(filtered.is_empty());
    }

    #[test]
    fn suppressed_group_is_absent_from_serialization() {
        let tree = vec![
            NavItem::group(
                "Admin tools",
                "tools",
                vec![NavSubItem::new("Audit", "/audit").restricted_to(&[Role::Admin])],
            ),
        ];
        let filtered = filter_nav(&tree, Some(&Role::Student));
        let json = serde_json::to_string(&filtered).expect("serialize");
        assert_eq!(json, "[]");
    }

    #[test]
    fn unrestricted_leaf_is_visible_to_every_role() {
        for role in [Role::Admin, Role::Teacher, Role::Student] {
            let filtered = filter_nav(&sample_tree(), Some(&role));
            assert!(names(&filtered).contains(&"Calendar"));
        }
    }

    #[test]
    fn no_role_keeps_only_unrestricted_leaves() {
        let filtered = filter_nav(&sample_tree(), None);
        assert_eq!(names(&filtered), vec!["Calendar"]);
    }

    #[test]
    fn sub_items_inherit_parent_roles_not_visible_to_all() {
        let tree = vec![NavItem::group(
            "Attendance",
            "page",
            vec![NavSubItem::new("Summary", "/attendance/summary")],
        )
        .restricted_to(&[Role::Admin, Role::Teacher])];
        // The sub-entry has no roles of its own; it inherits the parent's
        // staff restriction rather than becoming visible to all.
        assert!(filter_nav(&tree, Some(&Role::Student)).is_empty());
        assert_eq!(filter_nav(&tree, Some(&Role::Teacher)).len(), 1);
    }

    #[test]
    fn filtering_is_idempotent() {
        for role in [
            Some(Role::Admin),
            Some(Role::Teacher),
            Some(Role::Student),
            None,
        ] {
            let once = filter_nav(&sample_tree(), role.as_ref());
            let twice = filter_nav(&once, role.as_ref());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn unknown_role_sees_only_unrestricted_leaves() {
        let role = Role::Other("inspector".to_string());
        let filtered = filter_nav(&sample_tree(), Some(&role));
        assert_eq!(names(&filtered), vec!["Calendar"]);
    }
}
