//! # stockroom
//!
//! Leptos + WASM single-page frontend for the Stockroom admin panel:
//! authentication, dashboard and reports, and CRUD management of users and
//! items against the `/api/v1` REST API.
//!
//! The engineering core is the client-side session: `state::session` owns
//! the token/user lifecycle, `routing` guards every navigation, and `net`
//! speaks the wire protocol, including bearer-token extraction from
//! response headers. Pages and components are thin views over that core.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
