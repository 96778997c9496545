//! Root component, HTML shell and route tree.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::components::navbar::Navbar;
use crate::components::route_guard::{ProtectedRoute, PublicRoute};
use crate::net::api;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::records::{RecordActions, RecordListPage};
use crate::pages::register::RegisterPage;
use crate::pages::submit_report::SubmitReportPage;
use crate::pages::unauthorized::UnauthorizedPage;
use crate::routes::AppRoute;
use crate::state::session::provide_session;

/// One list shown on a record page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RecordSection {
    pub title: &'static str,
    pub endpoint: &'static str,
    pub actions: RecordActions,
}

const fn section(title: &'static str, endpoint: &'static str, actions: RecordActions) -> RecordSection {
    RecordSection { title, endpoint, actions }
}

/// Lists behind each record route; empty for form and public routes.
pub(crate) fn record_sections(route: AppRoute) -> Vec<RecordSection> {
    let title = route.title();
    match route {
        AppRoute::Reports => vec![section(title, api::REPORTS_ENDPOINT, RecordActions::None)],
        AppRoute::AllReports => vec![section(title, api::ALL_REPORTS_ENDPOINT, RecordActions::None)],
        AppRoute::ManageReports => vec![section(title, api::ALL_REPORTS_ENDPOINT, RecordActions::ReportStatus)],
        AppRoute::AdminDashboard => vec![
            section("Users", api::USERS_ENDPOINT, RecordActions::UserAdmin),
            section("Manage Reports", api::ALL_REPORTS_ENDPOINT, RecordActions::ReportStatus),
        ],
        AppRoute::Analytics => vec![section(title, api::CRIME_STATS_ENDPOINT, RecordActions::None)],
        AppRoute::Notifications => vec![section(title, api::NOTIFICATIONS_ENDPOINT, RecordActions::MarkRead)],
        AppRoute::Home
        | AppRoute::Login
        | AppRoute::Register
        | AppRoute::Unauthorized
        | AppRoute::Dashboard
        | AppRoute::SubmitReport => Vec::new(),
    }
}

/// HTML document rendered by the host server around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Protected record page for `route`.
fn record_view(route: AppRoute) -> impl IntoView {
    view! {
        <ProtectedRoute required_roles=route.required_roles()>
            {record_sections(route)
                .into_iter()
                .map(|s| view! { <RecordListPage title=s.title endpoint=s.endpoint actions=s.actions/> })
                .collect_view()}
        </ProtectedRoute>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Title text="Crime Reporting"/>
        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| view! { <p class="not-found">"404 - Page Not Found"</p> }>
                    <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                    <Route path=StaticSegment(AppRoute::Unauthorized.segment()) view=UnauthorizedPage/>
                    <Route
                        path=StaticSegment(AppRoute::Login.segment())
                        view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Register.segment())
                        view=|| view! { <PublicRoute><RegisterPage/></PublicRoute> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Dashboard.segment())
                        view=|| {
                            view! {
                                <ProtectedRoute required_roles=AppRoute::Dashboard.required_roles()>
                                    <DashboardPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment(AppRoute::SubmitReport.segment())
                        view=|| {
                            view! {
                                <ProtectedRoute required_roles=AppRoute::SubmitReport.required_roles()>
                                    <SubmitReportPage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route path=StaticSegment(AppRoute::Reports.segment()) view=|| record_view(AppRoute::Reports)/>
                    <Route path=StaticSegment(AppRoute::AllReports.segment()) view=|| record_view(AppRoute::AllReports)/>
                    <Route
                        path=StaticSegment(AppRoute::ManageReports.segment())
                        view=|| record_view(AppRoute::ManageReports)
                    />
                    <Route
                        path=StaticSegment(AppRoute::AdminDashboard.segment())
                        view=|| record_view(AppRoute::AdminDashboard)
                    />
                    <Route path=StaticSegment(AppRoute::Analytics.segment()) view=|| record_view(AppRoute::Analytics)/>
                    <Route
                        path=StaticSegment(AppRoute::Notifications.segment())
                        view=|| record_view(AppRoute::Notifications)
                    />
                </Routes>
            </main>
        </Router>
    }
}
