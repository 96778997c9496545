//! Top navigation bar with session-aware links and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links come from the route table and are filtered through the same decision
//! `ProtectedRoute` makes, so the bar never offers a page that would bounce
//! the user to `/unauthorized`.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::AppRoute;
use crate::state::auth::SessionState;
use crate::state::session::use_session;
use crate::util::auth::{GuardState, evaluate_protected};

/// Order in which signed-in links appear.
const SIGNED_IN_ORDER: [AppRoute; 8] = [
    AppRoute::Dashboard,
    AppRoute::SubmitReport,
    AppRoute::Notifications,
    AppRoute::AllReports,
    AppRoute::ManageReports,
    AppRoute::Analytics,
    AppRoute::Reports,
    AppRoute::AdminDashboard,
];

/// Links to show for the given session.
pub fn nav_links(state: &SessionState) -> Vec<AppRoute> {
    let mut links = vec![AppRoute::Home];
    if state.loading {
        return links;
    }
    if state.user.is_none() {
        links.extend([AppRoute::Login, AppRoute::Register]);
        return links;
    }
    links.extend(
        SIGNED_IN_ORDER
            .into_iter()
            .filter(|route| evaluate_protected(state, route.required_roles()) == GuardState::Allowed),
    );
    links
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let menu_open = RwSignal::new(false);
    let location = use_location();
    let current = Memo::new(move |_| AppRoute::from_path(&location.pathname.get()));

    let on_logout = move |_| {
        menu_open.set(false);
        session.logout();
    };

    view! {
        <nav class="navbar">
            <div class="navbar-header">
                <h2 class="navbar-title">"THE REAL CRIME REPORTING WEBSITE"</h2>
                <button class="menu-toggle" on:click=move |_| menu_open.update(|open| *open = !*open)>
                    "☰"
                </button>
            </div>
            <ul class="menu" class:open=move || menu_open.get()>
                {move || {
                    nav_links(&state.get())
                        .into_iter()
                        .map(|route| {
                            view! {
                                <li
                                    class:active=move || current.get() == Some(route)
                                    on:click=move |_| menu_open.set(false)
                                >
                                    <A href=route.path()>{route.title()}</A>
                                </li>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || state.get().user.is_some()>
                    <li>
                        <button on:click=on_logout.clone()>"Logout"</button>
                    </li>
                </Show>
            </ul>
        </nav>
    }
}
