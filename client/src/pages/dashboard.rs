//! Citizen landing page: greeting, role summary and quick actions.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::{AccountStatus, Role, User};
use crate::routes::AppRoute;
use crate::state::session::use_session;
use crate::util::auth::role_satisfies;

pub(crate) fn greeting(user: Option<&User>) -> String {
    let name = user.map_or("Guest", User::display_name);
    format!("Karibu, {name}")
}

pub(crate) fn role_description(role: Role) -> &'static str {
    match role {
        Role::Admin => "You manage users and have full access to all reports.",
        Role::LawEnforcement => "You track and update reports to maintain law and order.",
        Role::Citizen => "You can report crime in your area. Stay alert, stay safe.",
    }
}

/// Notice for accounts whose status deserves a mention, if any.
pub(crate) fn status_notice(status: AccountStatus) -> Option<&'static str> {
    match status {
        AccountStatus::Approved => None,
        AccountStatus::Pending => Some("Your account is awaiting approval by an administrator."),
        AccountStatus::Unknown => Some("Your account status could not be confirmed."),
        AccountStatus::Suspended | AccountStatus::Rejected => Some("Your account is not active."),
    }
}

const QUICK_ACTIONS: [AppRoute; 4] = [
    AppRoute::SubmitReport,
    AppRoute::Reports,
    AppRoute::ManageReports,
    AppRoute::Notifications,
];

/// Quick-action routes the role may open, in display order.
pub(crate) fn quick_actions(role: Role) -> Vec<AppRoute> {
    QUICK_ACTIONS
        .into_iter()
        .filter(|route| role_satisfies(role, route.required_roles()))
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_session().state();
    let user = move || state.get().user;

    view! {
        <div class="dashboard-page">
            <h1>{move || greeting(user().as_ref())}</h1>
            <ul class="welcome-points">
                <li>"Let's unite to build a peaceful Kenya."</li>
                <li>"Use your role to protect and empower your community."</li>
            </ul>
            {move || {
                user().map(|u| {
                    let notice = status_notice(u.status);
                    view! {
                        <div class="user-role-box">
                            <h3>"Your Role: " {u.role.label()}</h3>
                            <p>{role_description(u.role)}</p>
                            {notice.map(|text| view! { <p class="status-notice">{text}</p> })}
                            <div class="dashboard-actions">
                                {quick_actions(u.role)
                                    .into_iter()
                                    .map(|route| {
                                        view! { <a href=route.path() class="action-button">{route.title()}</a> }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
