//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <div class="home-hero">
                <h1>"Welcome to the Crime Reporting platform"</h1>
                <p>
                    "Report incidents in your area, follow their progress, and help keep your community safe."
                </p>
                <h2>"Key Features"</h2>
                <ul class="home-features">
                    <li><strong>"Location tagging: "</strong>"every report carries where it happened."</li>
                    <li><strong>"Secure reporting: "</strong>"reports are tied to verified accounts."</li>
                    <li><strong>"Analytics: "</strong>"see crime counts by category."</li>
                    <li><strong>"Role-based access: "</strong>"citizens, law enforcement and admins each get their own tools."</li>
                </ul>
                <div class="home-actions">
                    <A href=AppRoute::Register.path()>"Get Started"</A>
                    <A href=AppRoute::Login.path()>"Login"</A>
                </div>
            </div>
        </div>
    }
}
