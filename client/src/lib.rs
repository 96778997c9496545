//! Browser client for the crime reporting platform.
//!
//! ARCHITECTURE
//! ============
//! - `net`: wire types, the credential-attaching request client, and
//!   credential storage.
//! - `state`: the session state machine and the store that drives it.
//! - `routes` and `util::auth`: the route table and pure guard decisions.
//! - `components` and `pages`: Leptos views over the above.
//!
//! The crate builds twice: with `hydrate` for the browser bundle and with
//! `ssr` for the host server's renderer.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
