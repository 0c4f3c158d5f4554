//! HTTP layer: wire types, error taxonomy, and per-resource REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Real requests go through `gloo-net` and exist only under the `hydrate`
//! feature; every resource module ships non-browser stubs so the crate
//! compiles and tests on the native target.

pub mod auth;
pub mod error;
pub mod headers;
#[cfg(feature = "hydrate")]
mod http;
pub mod items;
pub mod reports;
pub mod types;
pub mod users;
