//! Route table: every path the router knows and who may see it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` builds the router from this table, guards read role requirements
//! from it, and the navbar derives its links from it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

const CITIZEN: &[Role] = &[Role::Citizen];
const EVERY_ROLE: &[Role] = &[Role::Citizen, Role::LawEnforcement, Role::Admin];
const STAFF: &[Role] = &[Role::LawEnforcement, Role::Admin];
const LAW_ENFORCEMENT: &[Role] = &[Role::LawEnforcement];
const ADMIN: &[Role] = &[Role::Admin];
const ANALYSTS: &[Role] = &[Role::Admin, Role::LawEnforcement];

/// How a route is gated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// No guard at all.
    Open,
    /// Only for logged-out visitors (`PublicRoute`).
    Guest,
    /// `ProtectedRoute` with the given roles; empty means any acceptable user.
    Protected(&'static [Role]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    Register,
    Unauthorized,
    Dashboard,
    SubmitReport,
    Reports,
    AllReports,
    ManageReports,
    AdminDashboard,
    Analytics,
    Notifications,
}

impl AppRoute {
    pub const ALL: [AppRoute; 12] = [
        AppRoute::Home,
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::Unauthorized,
        AppRoute::Dashboard,
        AppRoute::SubmitReport,
        AppRoute::Reports,
        AppRoute::AllReports,
        AppRoute::ManageReports,
        AppRoute::AdminDashboard,
        AppRoute::Analytics,
        AppRoute::Notifications,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Login => "/login",
            AppRoute::Register => "/register",
            AppRoute::Unauthorized => "/unauthorized",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::SubmitReport => "/submit-report",
            AppRoute::Reports => "/reports",
            AppRoute::AllReports => "/all-reports",
            AppRoute::ManageReports => "/manage-reports",
            AppRoute::AdminDashboard => "/admin-dashboard",
            AppRoute::Analytics => "/analytics",
            AppRoute::Notifications => "/notifications",
        }
    }

    /// Router segment: the path without its leading slash.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    pub fn access(self) -> Access {
        match self {
            AppRoute::Home | AppRoute::Unauthorized => Access::Open,
            AppRoute::Login | AppRoute::Register => Access::Guest,
            AppRoute::Dashboard => Access::Protected(CITIZEN),
            AppRoute::SubmitReport | AppRoute::AllReports | AppRoute::Notifications => Access::Protected(EVERY_ROLE),
            AppRoute::Reports => Access::Protected(STAFF),
            AppRoute::ManageReports => Access::Protected(LAW_ENFORCEMENT),
            AppRoute::AdminDashboard => Access::Protected(ADMIN),
            AppRoute::Analytics => Access::Protected(ANALYSTS),
        }
    }

    /// Roles a `ProtectedRoute` requires here; empty for unguarded routes.
    pub fn required_roles(self) -> &'static [Role] {
        match self.access() {
            Access::Protected(roles) => roles,
            Access::Open | Access::Guest => &[],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::Login => "Login",
            AppRoute::Register => "Register",
            AppRoute::Unauthorized => "Access Denied",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::SubmitReport => "Report Crime",
            AppRoute::Reports => "View Reports",
            AppRoute::AllReports => "All Reports",
            AppRoute::ManageReports => "Manage Reports",
            AppRoute::AdminDashboard => "Admin Dashboard",
            AppRoute::Analytics => "Analytics",
            AppRoute::Notifications => "Notifications",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Where a signed-in user lands after login or when visiting a guest route.
    pub fn landing_for(role: Role) -> Self {
        match role {
            Role::Admin => AppRoute::AdminDashboard,
            Role::LawEnforcement => AppRoute::Reports,
            Role::Citizen => AppRoute::Dashboard,
        }
    }
}
