//! `ProtectedRoute` and `PublicRoute` wrappers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded page in `app` is wrapped in one of these. Both re-run their
//! decision whenever the session signal changes and render a placeholder
//! while hydration is pending.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::loading::LoadingPlaceholder;
use crate::net::types::Role;
use crate::state::session::use_session;
use crate::util::auth::{GuardOutcome, evaluate_protected, evaluate_public, redirect_reason};

/// Renders `children` only for users whose status and role pass.
#[component]
pub fn ProtectedRoute(#[prop(optional)] required_roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = use_session().state();

    move || {
        let state = session.get();
        match evaluate_protected(&state, required_roles).outcome() {
            GuardOutcome::Placeholder => view! { <LoadingPlaceholder/> }.into_any(),
            GuardOutcome::Render => children().into_any(),
            GuardOutcome::Redirect(target) => {
                if let Some(reason) = redirect_reason(&state, required_roles) {
                    leptos::logging::warn!("{reason}");
                }
                view! { <Redirect path=target.path()/> }.into_any()
            }
        }
    }
}

/// Renders `children` only for logged-out visitors.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session().state();

    move || match evaluate_public(&session.get()) {
        GuardOutcome::Placeholder => view! { <LoadingPlaceholder/> }.into_any(),
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Redirect(target) => view! { <Redirect path=target.path()/> }.into_any(),
    }
}
