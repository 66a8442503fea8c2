//! The static navigation tree.
//!
//! Compiled into the client; visibility is resolved per render by the
//! navigation resolver, never by the rendering code itself.

use slateboard_nav::{NavItem, NavSubItem};

use crate::routes::{ADMIN_ONLY, EVERYONE, STAFF};

/// Main sidebar section.
pub fn main_nav() -> Vec<NavItem> {
    vec![
        NavItem::group(
            "Dashboard",
            "grid",
            vec![NavSubItem::new("Analytics", "/")],
        )
        .restricted_to(EVERYONE),
        NavItem::leaf("Calendar", "calendar", "/calendar").restricted_to(EVERYONE),
        NavItem::leaf("User Profile", "user", "/profile").restricted_to(EVERYONE),
        NavItem::group(
            "Results",
            "page",
            vec![
                NavSubItem::new("Check Results", "/results/check"),
                NavSubItem::new("Upload Result", "/results/upload"),
            ],
        )
        .restricted_to(STAFF),
        NavItem::group(
            "Attendance",
            "page",
            vec![
                NavSubItem::new("Teacher Attendance", "/attendance/teachers"),
                NavSubItem::new("Student Attendance", "/attendance/students"),
                NavSubItem::new("Attendance Summary", "/attendance/summary"),
            ],
        )
        .restricted_to(STAFF),
        NavItem::group(
            "Library",
            "library",
            vec![
                NavSubItem::new("Issue books", "/library/issue"),
                NavSubItem::new("View books", "/library/view"),
                NavSubItem::new("Add books", "/library/add").restricted_to(STAFF),
                NavSubItem::new("Books list", "/library/books"),
            ],
        )
        .restricted_to(EVERYONE),
        NavItem::group(
            "Syllabus",
            "table",
            vec![NavSubItem::new("Syllabus", "/syllabus")],
        )
        .restricted_to(EVERYONE),
        NavItem::group(
            "Register",
            "register",
            vec![
                NavSubItem::new("Add Student", "/register/student"),
                NavSubItem::new("Add Teacher", "/register/teacher").restricted_to(ADMIN_ONLY),
                NavSubItem::new("Student List", "/register/students"),
            ],
        )
        .restricted_to(STAFF),
    ]
}

/// Secondary "Others" sidebar section.
pub fn others_nav() -> Vec<NavItem> {
    vec![
        NavItem::group(
            "Authentication",
            "plug-in",
            vec![NavSubItem::new("Sign In", "/signin")],
        )
        .restricted_to(EVERYONE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use slateboard_core::Role;
    use slateboard_nav::filter_nav;

    fn names(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn admin_sees_the_full_menu() {
        let filtered = filter_nav(&main_nav(), Some(&Role::Admin));
        assert_eq!(
            names(&filtered),
            vec![
                "Dashboard",
                "Calendar",
                "User Profile",
                "Results",
                "Attendance",
                "Library",
                "Syllabus",
                "Register",
            ]
        );
    }

    #[test]
    fn student_menu_has_no_staff_sections() {
        let filtered = filter_nav(&main_nav(), Some(&Role::Student));
        let visible = names(&filtered);
        assert!(!visible.contains(&"Results"));
        assert!(!visible.contains(&"Attendance"));
        assert!(!visible.contains(&"Register"));
        assert!(visible.contains(&"Library"));
    }

    #[test]
    fn student_library_hides_add_books() {
        let filtered = filter_nav(&main_nav(), Some(&Role::Student));
        let library = filtered
            .iter()
            .find(|i| i.name == "Library")
            .expect("library visible");
        let subs: Vec<&str> = library
            .sub_items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(subs, vec!["Issue books", "View books", "Books list"]);
    }

    #[test]
    fn teacher_register_hides_add_teacher() {
        let filtered = filter_nav(&main_nav(), Some(&Role::Teacher));
        let register = filtered
            .iter()
            .find(|i| i.name == "Register")
            .expect("register visible");
        let subs: Vec<&str> = register
            .sub_items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(subs, vec!["Add Student", "Student List"]);
    }

    #[test]
    fn signed_out_user_sees_nothing_in_main_nav() {
        assert!(filter_nav(&main_nav(), None).is_empty());
    }
}
