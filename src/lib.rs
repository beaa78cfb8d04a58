//! # gatehouse
//!
//! Leptos + WASM client application template with authenticated screens
//! (welcome, sign-in, sign-up, forgot-password, create-password, home,
//! settings) atop a hosted identity service.
//!
//! The core is small on purpose: a session store replaced only by the session
//! controller, a thin gateway over the service's REST operations, and a route
//! guard deciding redirects from (session, location) on every render. Screens
//! are glue around those three pieces.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mount the app over the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
