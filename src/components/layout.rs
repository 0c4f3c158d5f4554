//! Authenticated application shell: navigation bar around page content.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

#[cfg(feature = "hydrate")]
use crate::routing::LOGIN_PATH;
use crate::routing::{DASHBOARD_PATH, ITEMS_PATH, REPORTS_PATH, USERS_PATH};
use crate::state::session::SessionStore;
use crate::util::auth::install_guard;
use crate::util::storage::BrowserStorage;

/// Shell wrapped around every protected page. Installing the navigation
/// guard here means each protected route enforces authentication the
/// moment it mounts.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore<BrowserStorage>>>();
    let location = use_location();
    let navigate = use_navigate();
    install_guard(session, location.pathname, location.search, navigate.clone());

    let is_admin = move || session.with(|store| store.session.is_admin());
    let user_name = move || {
        session.with(|store| {
            store
                .session
                .user
                .as_ref()
                .map(|user| user.name.clone())
                .unwrap_or_default()
        })
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::auth::HttpAuthApi;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mut store = session.get_untracked();
                store.logout(&HttpAuthApi).await;
                session.set(store);
                navigate(LOGIN_PATH, NavigateOptions::default());
            });
        }
    };

    view! {
        <div class="layout">
            <nav class="layout__nav">
                <span class="layout__brand">"Stockroom"</span>
                <A href=DASHBOARD_PATH>"Dashboard"</A>
                <A href=REPORTS_PATH>"Reports"</A>
                <Show when=is_admin>
                    <A href=USERS_PATH>"Users"</A>
                </Show>
                <A href=ITEMS_PATH>"Items"</A>
                <span class="layout__spacer"></span>
                <span class="layout__user">{user_name}</span>
                <button class="layout__logout" on:click=on_logout>
                    "Sign Out"
                </button>
            </nav>
            <main class="layout__content">{children()}</main>
        </div>
    }
}
