//! Item CRUD calls.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use super::error::ApiError;
use super::types::{Item, ItemPayload};

pub const ITEMS_ENDPOINT: &str = "/api/v1/items";

/// Optional list filters accepted by the items index endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub category: Option<String>,
    pub active: Option<bool>,
}

#[cfg(any(test, feature = "hydrate"))]
fn items_endpoint(filter: &ItemFilter) -> String {
    let mut query = Vec::new();
    if let Some(category) = &filter.category {
        query.push(format!("category={category}"));
    }
    if let Some(active) = filter.active {
        query.push(format!("active={active}"));
    }
    if query.is_empty() {
        ITEMS_ENDPOINT.to_owned()
    } else {
        format!("{ITEMS_ENDPOINT}?{}", query.join("&"))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn item_endpoint(id: i64) -> String {
    format!("{ITEMS_ENDPOINT}/{id}")
}

/// List items, optionally filtered by category and active flag.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or envelope fails.
pub async fn fetch_items(filter: &ItemFilter) -> Result<Vec<Item>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_json(&items_endpoint(filter)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filter;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch a single item by id.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or envelope fails.
pub async fn fetch_item(id: i64) -> Result<Item, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_json(&item_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Create a new item.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or envelope fails.
pub async fn create_item(payload: &ItemPayload) -> Result<Item, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::post_json(ITEMS_ENDPOINT, payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Update an existing item.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request or envelope fails.
pub async fn update_item(id: i64, payload: &ItemPayload) -> Result<Item, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::put_json(&item_endpoint(id), payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Delete an item.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn delete_item(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::http::delete(&item_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
