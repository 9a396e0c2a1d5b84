//! Sidebar menus per role.
//!
//! Entries shared by several roles are declared once and referenced from each
//! role table, so a route or label change applies to every role at once.

use crate::api::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
    /// One level only: children never carry children of their own.
    pub children: &'static [NavItem],
}

impl NavItem {
    const fn leaf(label: &'static str, route: &'static str, icon: &'static str) -> Self {
        Self {
            label,
            route,
            icon,
            children: &[],
        }
    }

    const fn group(
        label: &'static str,
        route: &'static str,
        icon: &'static str,
        children: &'static [NavItem],
    ) -> Self {
        Self {
            label,
            route,
            icon,
            children,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True when `path` is this entry's route or one of its children's.
    pub fn matches(&self, path: &str) -> bool {
        route_matches(self.route, path) || self.children.iter().any(|c| c.matches(path))
    }
}

fn route_matches(route: &str, path: &str) -> bool {
    let path = path.trim_end_matches('/');
    path == route
        || path
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}

const DASHBOARD: NavItem = NavItem::leaf("Dashboard", "/dashboard", "fa-gauge");
const DAILY_ATTENDANCE: NavItem =
    NavItem::leaf("Daily Attendance", "/attendance/daily", "fa-fingerprint");
const ATTENDANCE_HISTORY: NavItem =
    NavItem::leaf("Attendance History", "/attendance/history", "fa-clock-rotate-left");
const LEAVE: NavItem = NavItem::leaf("Leave", "/leave", "fa-plane-departure");
const OVERTIME: NavItem = NavItem::leaf("Overtime", "/overtime", "fa-business-time");
const SCHEDULES: NavItem = NavItem::leaf("Schedules", "/schedules", "fa-calendar-days");
const ACTIVITY_LOG: NavItem = NavItem::leaf("Activity Log", "/activity-logs", "fa-list-check");
const PROFILE: NavItem = NavItem::leaf("Profile", "/profile", "fa-user");

const ATTENDANCE_GROUP: NavItem = NavItem::group(
    "Attendance",
    "/attendance",
    "fa-user-check",
    &[DAILY_ATTENDANCE, ATTENDANCE_HISTORY],
);

const OWNER_MENU: &[NavItem] = &[
    DASHBOARD,
    NavItem::leaf("Store Management", "/stores", "fa-store"),
    NavItem::group(
        "Reports",
        "/reports",
        "fa-chart-column",
        &[
            NavItem::leaf("Expenses", "/reports/expenses", "fa-money-bill-wave"),
            NavItem::leaf("Late Employees", "/reports/late-employees", "fa-user-clock"),
            NavItem::leaf("Leave vs Overtime", "/reports/leave-overtime", "fa-scale-balanced"),
        ],
    ),
    NavItem::leaf("Payroll", "/payroll", "fa-wallet"),
    ACTIVITY_LOG,
    PROFILE,
];

const ADMIN_MENU: &[NavItem] = &[
    DASHBOARD,
    ATTENDANCE_GROUP,
    NavItem::leaf("Leave Requests", LEAVE.route, LEAVE.icon),
    NavItem::leaf("Overtime Requests", OVERTIME.route, OVERTIME.icon),
    SCHEDULES,
    ACTIVITY_LOG,
    PROFILE,
];

const EMPLOYEE_MENU: &[NavItem] = &[DASHBOARD, ATTENDANCE_GROUP, LEAVE, OVERTIME, PROFILE];

impl Role {
    pub fn menu(self) -> &'static [NavItem] {
        match self {
            Role::Owner => OWNER_MENU,
            Role::Admin => ADMIN_MENU,
            Role::Employee => EMPLOYEE_MENU,
        }
    }

    /// Whether any entry of this role's menu leads to `path`.
    pub fn can_access(self, path: &str) -> bool {
        self.menu().iter().any(|item| item.matches(path))
    }
}

/// Menu for a raw role identifier; `None` for anything but the three roles.
pub fn menu_for_role(role: &str) -> Option<&'static [NavItem]> {
    Role::parse(role).map(Role::menu)
}

/// Roles whose menu leads to `path`.
pub fn roles_for(path: &str) -> Vec<Role> {
    Role::ALL
        .into_iter()
        .filter(|role| role.can_access(path))
        .collect()
}

/// Every route reachable from some menu, in first-seen order.
pub fn all_routes() -> Vec<&'static str> {
    let mut routes = Vec::new();
    for role in Role::ALL {
        for item in role.menu() {
            let leaves: Vec<&NavItem> = if item.has_children() {
                item.children.iter().collect()
            } else {
                vec![item]
            };
            for leaf in leaves {
                if !routes.contains(&leaf.route) {
                    routes.push(leaf.route);
                }
            }
        }
    }
    routes
}
