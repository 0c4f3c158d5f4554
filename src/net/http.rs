//! Shared request plumbing over `gloo-net`: bearer-token attachment, status
//! checks, and `{success, data}` envelope unwrapping.
//!
//! Only compiled under the `hydrate` feature; resource modules carry their
//! own non-browser stubs.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::ApiResponse;
use crate::util::storage::{BrowserStorage, KeyValueStore, TOKEN_KEY};

/// Attach the stored bearer token, when one exists.
fn attach_bearer(builder: RequestBuilder) -> RequestBuilder {
    match BrowserStorage.get(TOKEN_KEY) {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Build the error for a non-2xx response, preferring the envelope's
/// `message` text when the body carries one.
pub(crate) async fn error_from_response(resp: &Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<ApiResponse<serde_json::Value>>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_default();
    ApiError::Server { status, message }
}

async fn unwrap_envelope<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(error_from_response(&resp).await);
    }
    let body: ApiResponse<T> = resp.json().await.map_err(|_| ApiError::InvalidResponseFormat)?;
    body.into_data()
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = attach_bearer(Request::get(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    unwrap_envelope(resp).await
}

pub(crate) async fn post_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let resp = attach_bearer(Request::post(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    unwrap_envelope(resp).await
}

pub(crate) async fn put_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let resp = attach_bearer(Request::put(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    unwrap_envelope(resp).await
}

pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    let resp = attach_bearer(Request::delete(path))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(error_from_response(&resp).await);
    }
    Ok(())
}
