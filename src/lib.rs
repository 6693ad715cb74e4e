//! # resume-languages
//!
//! Leptos + WASM widget for the languages section of a resume profile: a
//! validated form for adding a language with a proficiency level, and the list
//! of languages already added with per-entry delete.
//!
//! The store, schema and editor are plain Rust (`state`, `form`); the
//! `components` and `pages` modules bind them to the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod form;
pub mod pages;
pub mod state;

/// Browser entrypoint: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
