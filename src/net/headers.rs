//! Case-insensitive response-header utilities for the login token protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth endpoint returns the bearer token in an `Authorization` response
//! header, and key casing is not guaranteed by the transport layer. Lookup
//! returns the first match in header iteration order.

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;

use super::error::ApiError;

const AUTHORIZATION: &str = "authorization";

/// Find the first header whose key matches `name` case-insensitively.
pub fn find_header<I>(entries: I, name: &str) -> Option<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    entries
        .into_iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

/// Strip one leading `Bearer` prefix (any casing, followed by any amount of
/// whitespace) and trim the surroundings. Values without the prefix come
/// back trimmed but otherwise untouched.
pub fn strip_bearer(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(prefix) = trimmed.get(..6) {
        if prefix.eq_ignore_ascii_case("bearer") {
            let rest = &trimmed[6..];
            if rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
    }
    trimmed
}

/// Extract the bearer token from a login response's headers.
///
/// # Errors
///
/// Returns [`ApiError::NoAuthHeader`] when no authorization-like header is
/// present, distinct from the missing-user body failure.
pub fn bearer_token<I>(entries: I) -> Result<String, ApiError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let value = find_header(entries, AUTHORIZATION).ok_or(ApiError::NoAuthHeader)?;
    Ok(strip_bearer(&value).to_owned())
}
