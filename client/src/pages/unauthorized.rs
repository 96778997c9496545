//! Shown when a signed-in user lacks the role or status a route requires.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let navigate = use_navigate();
    let go_home = move |_| navigate(AppRoute::Home.path(), NavigateOptions::default());

    view! {
        <div class="unauthorized-page">
            <h1>"Access Denied"</h1>
            <p>
                "You are logged in, but your account does not have the required permissions to access this page."
            </p>
            <p class="note">
                "Access depends on the role chosen at registration and on account approval. Contact an administrator if you believe this is an error."
            </p>
            <button class="btn" on:click=go_home>"Go to Home"</button>
        </div>
    }
}
