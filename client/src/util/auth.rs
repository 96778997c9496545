//! Route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` and `PublicRoute` render whatever these functions decide.
//! The functions are pure: the same session state and requirement always give
//! the same answer, and nothing is remembered between navigations.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::routes::AppRoute;
use crate::state::auth::SessionState;

/// Where the protected-route state machine ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Unauthenticated,
    ForbiddenStatus,
    ForbiddenRole,
    Allowed,
}

/// What a guard renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Placeholder,
    Render,
    Redirect(AppRoute),
}

impl GuardState {
    pub fn outcome(self) -> GuardOutcome {
        match self {
            GuardState::Loading => GuardOutcome::Placeholder,
            GuardState::Unauthenticated => GuardOutcome::Redirect(AppRoute::Login),
            GuardState::ForbiddenStatus | GuardState::ForbiddenRole => GuardOutcome::Redirect(AppRoute::Unauthorized),
            GuardState::Allowed => GuardOutcome::Render,
        }
    }
}

/// Admin satisfies everything; an empty requirement admits every role.
pub fn role_satisfies(role: Role, required: &[Role]) -> bool {
    match role {
        Role::Admin => true,
        Role::Citizen | Role::LawEnforcement => required.is_empty() || required.contains(&role),
    }
}

pub fn evaluate_protected(state: &SessionState, required: &[Role]) -> GuardState {
    if state.loading {
        return GuardState::Loading;
    }
    let Some(user) = &state.user else {
        return GuardState::Unauthenticated;
    };
    if !user.status.may_use_app() {
        return GuardState::ForbiddenStatus;
    }
    if role_satisfies(user.role, required) {
        GuardState::Allowed
    } else {
        GuardState::ForbiddenRole
    }
}

/// Guest-only routes send signed-in users to their landing page.
pub fn evaluate_public(state: &SessionState) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Placeholder;
    }
    match &state.user {
        Some(user) => GuardOutcome::Redirect(AppRoute::landing_for(user.role)),
        None => GuardOutcome::Render,
    }
}

/// Console message for a protected-route redirect, if there is one.
pub fn redirect_reason(state: &SessionState, required: &[Role]) -> Option<String> {
    let user = state.user.as_ref();
    match evaluate_protected(state, required) {
        GuardState::Loading | GuardState::Allowed => None,
        GuardState::Unauthenticated => Some("no user, redirecting to /login".to_owned()),
        GuardState::ForbiddenStatus => {
            let status = user.map(|u| u.status).unwrap_or_default();
            Some(format!("user status {status:?} not allowed, redirecting to /unauthorized"))
        }
        GuardState::ForbiddenRole => {
            let allowed = required.iter().copied().map(Role::as_str).collect::<Vec<_>>().join(", ");
            let got = user.map_or("none", |u| u.role.as_str());
            Some(format!("role mismatch (allowed: {allowed}, got: {got}), redirecting to /unauthorized"))
        }
    }
}
