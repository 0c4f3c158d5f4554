//! Client-side authentication session: state, transitions, and persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the one piece of this app with real state-transition
//! semantics. The route guard reads it before every navigation, the login
//! page drives its actions, and durable storage mirrors it across reloads.
//!
//! INVARIANT
//! =========
//! `token` and `user` are set and cleared together on every completed
//! action (login success, logout, failed re-validation, corrupt
//! hydration). Transient mismatches are allowed only while a request is in
//! flight.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::logging;

use crate::net::auth::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{LoginCredentials, LoginSuccess, Role, User};
use crate::util::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};

/// Fallback error text when the server gave nothing more specific.
pub const GENERIC_LOGIN_FAILURE: &str = "Login failed. Please try again.";

/// In-memory session data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    /// Current user record, replaced wholesale on login/check/logout.
    pub user: Option<User>,
    /// Opaque bearer token, mirrored into durable storage.
    pub token: Option<String>,
    /// True only while a login request is in flight.
    pub loading: bool,
    /// Last login failure, cleared at the start of every attempt.
    pub error: Option<String>,
}

impl Session {
    /// Whether both halves of the session are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Whether the current user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.role == Role::Admin)
    }
}

/// Session state plus the durable storage it is mirrored into.
///
/// Generic over [`KeyValueStore`] so the full lifecycle runs against an
/// in-memory store in tests.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    pub session: Session,
    storage: S,
}

fn decode_stored_user(raw: &str) -> Result<User, ApiError> {
    serde_json::from_str(raw).map_err(|_| ApiError::CorruptStoredSession)
}

fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Server { message, .. } if !message.is_empty() => message.clone(),
        ApiError::Server { .. } | ApiError::Transport(_) => GENERIC_LOGIN_FAILURE.to_owned(),
        other => other.to_string(),
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Build a store seeded with any token that survived in durable
    /// storage. The cached user record is adopted lazily by
    /// [`SessionStore::initialize_auth`].
    pub fn new(storage: S) -> Self {
        let token = storage.get(TOKEN_KEY);
        Self {
            session: Session {
                token,
                ..Session::default()
            },
            storage,
        }
    }

    /// Mark a login attempt as started: raises `loading`, clears the
    /// previous error.
    pub fn begin_login(&mut self) {
        self.session.loading = true;
        self.session.error = None;
    }

    /// Apply a login outcome. On success the token/user pair replaces the
    /// session and both durable keys are written; on failure the previous
    /// session survives untouched and only `error` is set. `loading` is
    /// released on every path.
    pub fn complete_login(&mut self, outcome: Result<LoginSuccess, ApiError>) -> bool {
        let ok = match outcome {
            Ok(LoginSuccess { token, user }) => {
                self.storage.set(TOKEN_KEY, &token);
                if let Ok(raw) = serde_json::to_string(&user) {
                    self.storage.set(USER_KEY, &raw);
                }
                self.session.token = Some(token);
                self.session.user = Some(user);
                true
            }
            Err(error) => {
                self.session.error = Some(login_error_message(&error));
                false
            }
        };
        self.session.loading = false;
        ok
    }

    /// Authenticate against the API. Never fails outward: the result and
    /// the reactive `error` field are the only failure signals.
    pub async fn login<A: AuthApi>(&mut self, api: &A, credentials: &LoginCredentials) -> bool {
        self.begin_login();
        let outcome = api.login(credentials).await;
        self.complete_login(outcome)
    }

    /// Drop the session from memory and durable storage. This is the local
    /// half of logout and the cleanup path for invalid sessions.
    pub fn clear(&mut self) {
        self.session.token = None;
        self.session.user = None;
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    /// Log out. The remote invalidation call is best-effort: its failure is
    /// logged and ignored so the client can never get stuck signed in.
    pub async fn logout<A: AuthApi>(&mut self, api: &A) {
        if let Err(error) = api.logout().await {
            logging::warn!("logout request failed: {error}");
        }
        self.clear();
    }

    /// Re-validate the held token against the server. Without a token this
    /// returns `false` immediately and performs no network call. Any
    /// failure means the session is invalid and clears it entirely.
    pub async fn check_auth<A: AuthApi>(&mut self, api: &A) -> bool {
        if self.session.token.is_none() {
            return false;
        }
        match api.current_user().await {
            Ok(user) => {
                self.session.user = Some(user);
                true
            }
            Err(_) => {
                self.clear();
                false
            }
        }
    }

    /// Hydrate the session from durable storage.
    ///
    /// Adopts the stored token/user pair only when both keys are present
    /// and the user record parses; anything less leaves a fully empty
    /// session and purges whatever half-state was stored (or seeded into
    /// memory at construction). Idempotent; the navigation layer only
    /// calls it when a token is held without a user.
    pub fn initialize_auth(&mut self) {
        let stored_token = self.storage.get(TOKEN_KEY);
        let stored_user = self.storage.get(USER_KEY);
        let (Some(token), Some(raw)) = (stored_token, stored_user) else {
            self.clear();
            return;
        };
        match decode_stored_user(&raw) {
            Ok(user) => {
                self.session.token = Some(token);
                self.session.user = Some(user);
            }
            Err(error) => {
                logging::warn!("stored session is unreadable, clearing: {error}");
                self.clear();
            }
        }
    }
}
