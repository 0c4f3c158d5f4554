//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::notification_list::NotificationList;
use crate::pages::{
    dashboard::DashboardPage, items::ItemsPage, login::LoginPage, reports::ReportsPage,
    users::UsersPage,
};
use crate::routing::DASHBOARD_PATH;
use crate::state::notifications::Notifications;
use crate::state::session::SessionStore;
use crate::util::auth::install_session_revalidation;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
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

/// Root application component.
///
/// Provides the session store and notification service as shared contexts
/// and sets up client-side routing. The session seeds its token from
/// durable storage at construction; the cached user record is adopted
/// lazily by the route guard, and a restored token is re-validated against
/// the server once per cold load.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::new(BrowserStorage));
    let notifications = RwSignal::new(Notifications::default());

    provide_context(session);
    provide_context(notifications);

    install_session_revalidation(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/stockroom.css"/>
        <Title text="Stockroom"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundRedirect/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("reports") view=ReportsPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("items") view=ItemsPage/>
            </Routes>
        </Router>

        <NotificationList/>
    }
}

/// Catch-all: unknown paths land back on the dashboard (which the guard
/// turns into a login redirect for signed-out visitors).
#[component]
fn NotFoundRedirect() -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move || {
        navigate(DASHBOARD_PATH, NavigateOptions::default());
    });

    view! { <p class="not-found">"Redirecting..."</p> }
}
