//! # studyhub
//!
//! Leptos + WASM front-end for the StudyHub community learning platform.
//!
//! The working core is the invite-gated authentication/session lifecycle:
//! token acquisition and persistence, session resolution into a shared
//! context, and the invite-code check that gates registration. Pages and
//! components render on top of that state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
