//! Per-navigation guard decisions.
//!
//! Evaluated synchronously on every route transition; any network work
//! happens inside the session store actions the caller invokes, never here.
//! There are no retries: a failed hydration simply leaves the session
//! unauthenticated and lands in the login redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::{DASHBOARD_PATH, LOGIN_PATH, is_login, requires_auth};

/// Outcome of evaluating a route transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Continue to the requested route unchanged.
    Proceed,
    /// Send the visitor to login, remembering where they wanted to go.
    RedirectToLogin { redirect: String },
    /// Already signed in; leave the login page for the landing route.
    RedirectToDashboard,
}

/// Apply the decision table for a transition to `target`.
pub fn evaluate(target: &str, is_authenticated: bool) -> GuardDecision {
    if requires_auth(target) && !is_authenticated {
        GuardDecision::RedirectToLogin {
            redirect: target.to_owned(),
        }
    } else if is_login(target) && is_authenticated {
        GuardDecision::RedirectToDashboard
    } else {
        GuardDecision::Proceed
    }
}

/// Login URL carrying the intended destination as a query parameter.
pub fn login_redirect_url(target: &str) -> String {
    format!("{LOGIN_PATH}?redirect={target}")
}

/// Destination named by a login-page query string, defaulting to the
/// dashboard. Only same-app absolute paths are honored.
pub fn redirect_target(search: &str) -> String {
    let query = search.strip_prefix('?').unwrap_or(search);
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("redirect="))
        .filter(|value| value.starts_with('/'))
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| DASHBOARD_PATH.to_owned())
}
