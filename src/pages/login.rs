//! Login page: email + password form with inline error display.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;

use crate::net::types::LoginCredentials;
use crate::state::session::SessionStore;
use crate::util::auth::install_guard;
use crate::util::storage::BrowserStorage;

#[cfg(feature = "hydrate")]
use crate::net::auth::{AuthApi, HttpAuthApi};
#[cfg(feature = "hydrate")]
use crate::routing::guard::redirect_target;

/// Validate the raw form fields, returning trimmed credentials.
fn validate_login_input(email: &str, password: &str) -> Result<LoginCredentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginCredentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Login page. An already-authenticated visit bounces straight to the
/// destination named by the `redirect` query parameter.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore<BrowserStorage>>>();
    let location = use_location();
    let navigate = use_navigate();
    install_guard(session, location.pathname, location.search, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let busy = move || session.with(|store| store.session.loading);
    let login_error = move || session.with(|store| store.session.error.clone());

    #[cfg(feature = "hydrate")]
    let search = location.search;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                session.update(SessionStore::begin_login);
                let outcome = HttpAuthApi.login(&credentials).await;
                let ok = session
                    .try_update(|store| store.complete_login(outcome))
                    .unwrap_or(false);
                if ok {
                    let target = redirect_target(&search.get_untracked());
                    navigate(&target, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &credentials;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Stockroom"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || form_error.get().is_some()>
                    <p class="login-message">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || login_error().is_some()>
                    <p class="login-message login-message--error">
                        {move || login_error().unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
