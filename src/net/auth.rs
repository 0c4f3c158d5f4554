//! Authentication endpoints and the transport seam used by the session store.
//!
//! ERROR HANDLING
//! ==============
//! Distinct failures stay distinct (`NoAuthHeader` for a token missing from
//! the response headers, `InvalidResponseFormat` for a user missing from the
//! body) so the session store can surface specific error text, even though
//! both collapse into the same failed-login outcome.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::types::{LoginCredentials, LoginSuccess, User};

pub const LOGIN_ENDPOINT: &str = "/api/v1/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/v1/auth/logout";
pub const ME_ENDPOINT: &str = "/api/v1/auth/me";

/// Transport operations the session store depends on. The production
/// implementation is [`HttpAuthApi`]; tests substitute scripted fakes.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for a bearer token and user record.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginSuccess, ApiError>;
    /// Invalidate the server-side session for the current token.
    async fn logout(&self) -> Result<(), ApiError>;
    /// Fetch the user record the current bearer token belongs to.
    async fn current_user(&self) -> Result<User, ApiError>;
}

/// Wrap credentials the way the login endpoint expects them.
#[cfg(any(test, feature = "hydrate"))]
fn login_payload(credentials: &LoginCredentials) -> serde_json::Value {
    serde_json::json!({ "user": credentials })
}

/// [`AuthApi`] backed by `gloo-net`. Stubbed outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginSuccess, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            #[derive(serde::Deserialize)]
            struct LoginData {
                #[serde(default)]
                user: Option<User>,
            }

            let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
                .header("Accept", "application/json")
                .json(&login_payload(credentials))
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(super::http::error_from_response(&resp).await);
            }

            // Header first: a missing token must be reported as the
            // header failure even when the body is also malformed.
            let token = super::headers::bearer_token(resp.headers().entries())?;
            let body: super::types::ApiResponse<LoginData> = resp
                .json()
                .await
                .map_err(|_| ApiError::InvalidResponseFormat)?;
            let user = body
                .into_data()?
                .user
                .ok_or(ApiError::InvalidResponseFormat)?;
            Ok(LoginSuccess { token, user })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            super::http::delete(LOGOUT_ENDPOINT).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            super::http::get_json(ME_ENDPOINT).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }
}
