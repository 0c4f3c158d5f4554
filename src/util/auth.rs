//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical guard behavior by installing these
//! effects; the decision logic itself lives in `routing::guard`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routing::guard::{self, GuardDecision};
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStorage;

/// Install the navigation guard for the current route scope.
///
/// Re-evaluates whenever the location or session changes: hydrates the
/// session from durable storage when a token is held without a user (lazy
/// hydration, once per cold load by construction), then applies the
/// decision table.
pub fn install_guard<F>(
    session: RwSignal<SessionStore<BrowserStorage>>,
    pathname: Memo<String>,
    search: Memo<String>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = pathname.get();

        let needs_init = session.with(|store| {
            store.session.token.is_some() && store.session.user.is_none()
        });
        if needs_init {
            session.update(SessionStore::initialize_auth);
        }

        let authenticated = session.with_untracked(|store| store.session.is_authenticated());
        match guard::evaluate(&path, authenticated) {
            GuardDecision::Proceed => {}
            GuardDecision::RedirectToLogin { redirect } => {
                navigate(&guard::login_redirect_url(&redirect), NavigateOptions::default());
            }
            GuardDecision::RedirectToDashboard => {
                // Honor a pending `redirect` parameter so a completed login
                // lands where the visitor originally wanted to go.
                let target = guard::redirect_target(&search.get_untracked());
                navigate(&target, NavigateOptions::default());
            }
        }
    });
}

/// Re-validate a restored token against the server once per mount.
///
/// Any failure is treated as an invalid session: the store clears itself
/// and the guard effect takes care of the redirect.
pub fn install_session_revalidation(session: RwSignal<SessionStore<BrowserStorage>>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::auth::HttpAuthApi;

        Effect::new(move || {
            leptos::task::spawn_local(async move {
                let mut store = session.get_untracked();
                if store.session.token.is_none() {
                    return;
                }
                store.check_auth(&HttpAuthApi).await;
                session.set(store);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
