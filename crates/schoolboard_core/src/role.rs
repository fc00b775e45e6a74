//! Roles, screens and per-role navigation.
//!
//! # Responsibility
//! - Map each role to the screens it may open, exhaustively.
//! - Carry the identity read from the upstream session provider.
//!
//! # Invariants
//! - Every role gets the dashboard as its first navigation item.
//! - `Role::can_access` agrees with `Role::navigation` for every screen.

use crate::label::labelled_enum;
use serde::{Deserialize, Serialize};

labelled_enum! {
    /// Dashboard audience.
    pub enum Role {
        Student => "student",
        Teacher => "teacher",
        Parent => "parent",
        Admin => "admin",
    }
}

labelled_enum! {
    /// Navigable dashboard screen.
    pub enum Screen {
        Dashboard => "dashboard",
        Grades => "grades",
        Attendance => "attendance",
        Performance => "performance",
        Students => "students",
        Teachers => "teachers",
        Children => "children",
        Analytics => "analytics",
        Alerts => "alerts",
        Reports => "reports",
        Settings => "settings",
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub screen: Screen,
    pub label: &'static str,
}

const fn nav(screen: Screen, label: &'static str) -> NavItem {
    NavItem { screen, label }
}

const STUDENT_NAV: &[NavItem] = &[
    nav(Screen::Dashboard, "Dashboard"),
    nav(Screen::Grades, "My Grades"),
    nav(Screen::Attendance, "Attendance"),
    nav(Screen::Performance, "Performance"),
];

const TEACHER_NAV: &[NavItem] = &[
    nav(Screen::Dashboard, "Dashboard"),
    nav(Screen::Students, "Students"),
    nav(Screen::Grades, "Grade Management"),
    nav(Screen::Attendance, "Attendance"),
    nav(Screen::Analytics, "Analytics"),
    nav(Screen::Alerts, "Alerts"),
];

const PARENT_NAV: &[NavItem] = &[
    nav(Screen::Dashboard, "Dashboard"),
    nav(Screen::Children, "My Children"),
    nav(Screen::Grades, "Grades"),
    nav(Screen::Attendance, "Attendance"),
    nav(Screen::Reports, "Reports"),
];

const ADMIN_NAV: &[NavItem] = &[
    nav(Screen::Dashboard, "Dashboard"),
    nav(Screen::Students, "Students"),
    nav(Screen::Teachers, "Teachers"),
    nav(Screen::Grades, "Grade Management"),
    nav(Screen::Attendance, "Attendance"),
    nav(Screen::Analytics, "Analytics"),
    nav(Screen::Alerts, "Alerts"),
    nav(Screen::Reports, "Reports"),
    nav(Screen::Settings, "Settings"),
];

impl Role {
    /// Sidebar entries for this role, in display order.
    pub fn navigation(self) -> &'static [NavItem] {
        match self {
            Self::Student => STUDENT_NAV,
            Self::Teacher => TEACHER_NAV,
            Self::Parent => PARENT_NAV,
            Self::Admin => ADMIN_NAV,
        }
    }

    pub fn can_access(self, screen: Screen) -> bool {
        self.navigation().iter().any(|item| item.screen == screen)
    }
}

/// Signed-in user as exposed by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Role, Screen};

    #[test]
    fn every_role_starts_at_dashboard() {
        for role in Role::ALL {
            assert_eq!(role.navigation()[0].screen, Screen::Dashboard);
        }
    }

    #[test]
    fn settings_are_admin_only() {
        assert!(Role::Admin.can_access(Screen::Settings));
        assert!(!Role::Teacher.can_access(Screen::Settings));
        assert!(!Role::Parent.can_access(Screen::Settings));
        assert!(!Role::Student.can_access(Screen::Settings));
    }

    #[test]
    fn parents_see_children_but_not_students() {
        assert!(Role::Parent.can_access(Screen::Children));
        assert!(!Role::Parent.can_access(Screen::Students));
    }

    #[test]
    fn role_parses_from_label() {
        assert_eq!("Teacher".parse::<Role>().unwrap(), Role::Teacher);
        assert!("principal".parse::<Role>().is_err());
    }
}
