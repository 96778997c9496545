//! Registration page for citizens and law-enforcement officers.
//!
//! Law-enforcement accounts are created as `pending` by the backend and can
//! use the app before an admin approves them.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::{RegistrationRequest, Role};
use crate::routes::AppRoute;
#[cfg(feature = "hydrate")]
use crate::state::session::use_session;

pub const REGISTERED_MESSAGE: &str = "Registration successful! Redirecting to login...";

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    pub rank: String,
    pub details: String,
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

pub(crate) fn build_registration(form: &RegistrationForm) -> Result<RegistrationRequest, &'static str> {
    let email = non_empty(&form.email).ok_or("Email is required")?;
    if form.password.is_empty() {
        return Err("Password is required");
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match");
    }
    let role = match Role::parse(&form.role) {
        None => return Err("Role is required"),
        Some(Role::Admin) => return Err("Invalid role. Must be citizen or law enforcement."),
        Some(role) => role,
    };
    let (rank, details) = match role {
        Role::LawEnforcement => (non_empty(&form.rank), non_empty(&form.details)),
        Role::Citizen | Role::Admin => (None, None),
    };
    Ok(RegistrationRequest { email, password: form.password.clone(), role, rank, details })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::default());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let session = use_session();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let is_officer = move || Role::parse(&form.get().role) == Some(Role::LawEnforcement);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());
        let request = match build_registration(&form.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let client = session.store().client().clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&client, &request).await {
                    Ok(()) => {
                        success.set(REGISTERED_MESSAGE.to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                        navigate(AppRoute::Login.path(), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("registration failed: {e}");
                        error.set(e.detail().unwrap_or("Registration failed").to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h2>"Register"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="success">{move || success.get()}</p>
                </Show>
                <form on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Confirm Password"
                        required
                        prop:value=move || form.get().confirm_password
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                    <select
                        prop:value=move || form.get().role
                        on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                    >
                        <option value="">"Select Role"</option>
                        <option value=Role::Citizen.as_str()>{Role::Citizen.label()}</option>
                        <option value=Role::LawEnforcement.as_str()>{Role::LawEnforcement.label()}</option>
                    </select>
                    <Show when=is_officer>
                        <input
                            type="text"
                            placeholder="Rank"
                            prop:value=move || form.get().rank
                            on:input=move |ev| form.update(|f| f.rank = event_target_value(&ev))
                        />
                        <textarea
                            placeholder="Details (badge number, station)"
                            prop:value=move || form.get().details
                            on:input=move |ev| form.update(|f| f.details = event_target_value(&ev))
                        ></textarea>
                    </Show>
                    <button type="submit" disabled=move || busy.get()>"Register"</button>
                </form>
                <p>"Already registered? " <A href=AppRoute::Login.path()>"Login"</A></p>
            </div>
        </div>
    }
}
