//! User CRUD calls.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::error::ApiError;
use super::types::{User, UserPayload};

pub const USERS_ENDPOINT: &str = "/api/v1/users";

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(id: i64) -> String {
    format!("{USERS_ENDPOINT}/{id}")
}

/// List all user accounts.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or envelope fails.
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_json(USERS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch a single user by id.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or envelope fails.
pub async fn fetch_user(id: i64) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_json(&user_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Create a new user account.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or envelope fails.
pub async fn create_user(payload: &UserPayload) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::post_json(USERS_ENDPOINT, payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Update an existing user account.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or envelope fails.
pub async fn update_user(id: i64, payload: &UserPayload) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::put_json(&user_endpoint(id), payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Delete a user account.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::delete(&user_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
