//! Neutral placeholder shown while the session is hydrating.

use leptos::prelude::*;

#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! { <div class="loading">"Loading..."</div> }
}
