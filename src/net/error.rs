//! Error taxonomy for the HTTP layer.
//!
//! ERROR HANDLING
//! ==============
//! Login-time errors are flattened into the session store's `error` string
//! and never propagate past the store boundary; callers observe failure
//! through boolean returns and reactive state.

use thiserror::Error;

/// Failures surfaced by the API layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The login response carried no authorization-like header.
    #[error("no authorization token received from server")]
    NoAuthHeader,
    /// A response body did not match the expected envelope shape.
    #[error("invalid response format from server")]
    InvalidResponseFormat,
    /// The server answered with a non-2xx status. `message` carries the
    /// envelope's error text when one was present.
    #[error("request failed with status {status}")]
    Server { status: u16, message: String },
    /// The request never completed (network or fetch failure).
    #[error("request failed: {0}")]
    Transport(String),
    /// The durable user record could not be parsed.
    #[error("stored session data is corrupt")]
    CorruptStoredSession,
}
