//! Browser client for the blog's light/dark theme switcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! The blog is a static page; this crate ships the one interactive piece of
//! chrome it has: a button that flips the page between light and dark,
//! reflects the choice as a `data-theme` attribute the site CSS keys off,
//! and persists it to localStorage so the next visit starts where the
//! reader left off.
//!
//! The default (native) build carries no browser dependencies and exists to
//! run the unit-test suite; the `csr` feature enables the wasm/web-sys glue
//! and the mount entry point.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Browser entry point — installs diagnostics and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
