//! # eventhub
//!
//! Leptos + WASM front end for the EventHub hackathon/event platform.
//! Managers create and run events, students browse and register teams,
//! and managers review registrations and verify payments, all as CRUD
//! against the platform's REST API.
//!
//! The crate centers on the client-side session model: `state::session`
//! owns identity and the bearer token, `util::guard` decides route access
//! and redirects, and `net::api` attaches credentials and interprets
//! failures (including the global 401-invalidates-session rule).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
