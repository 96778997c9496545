//! Login page: email + password against the session store.
//!
//! On success the session is applied right away; the surrounding
//! `PublicRoute` then sends the user to their role landing page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::state::session::use_session;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your email and password, then try again.";

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub(crate) fn password_input_type(show: bool) -> &'static str {
    if show { "text" } else { "password" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match session.store().login(&email_value, &password_value).await {
                    Ok(event) => {
                        email.set(String::new());
                        password.set(String::new());
                        session.apply(event);
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        error.set(LOGIN_FAILED_MESSAGE.to_owned());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-container">
            <div class="login-form">
                <h2>"Login"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="error">{move || error.get()}</p>
                </Show>
                <form on:submit=on_submit autocomplete="off">
                    <input
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="password-container">
                        <input
                            type=move || password_input_type(show_password.get())
                            placeholder="Password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="password-toggle"
                            on:click=move |_| show_password.update(|show| *show = !*show)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button type="submit" disabled=move || busy.get()>"Login"</button>
                </form>
                <p>"No account? " <A href=AppRoute::Register.path()>"Register"</A></p>
            </div>
        </div>
    }
}
