//! Route table metadata and navigation guarding.
//!
//! ARCHITECTURE
//! ============
//! Routes are protected by default; only the login route is public. The
//! guard decision logic lives in [`guard`] as pure functions so every
//! branch of the decision table is testable without a router.


pub mod guard;

/// Public login route.
pub const LOGIN_PATH: &str = "/login";
/// Default authenticated landing route.
pub const DASHBOARD_PATH: &str = "/";
pub const REPORTS_PATH: &str = "/reports";
pub const USERS_PATH: &str = "/users";
pub const ITEMS_PATH: &str = "/items";

/// Whether `path` is the login route.
pub fn is_login(path: &str) -> bool {
    path == LOGIN_PATH
}

/// Whether navigating to `path` requires an authenticated session.
/// Everything is protected unless explicitly public.
pub fn requires_auth(path: &str) -> bool {
    !is_login(path)
}
