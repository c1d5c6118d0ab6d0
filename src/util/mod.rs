//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `toggler` holds the theme-switch logic behind capability traits so it is
//! unit-testable with fakes; `browser` supplies the web-sys implementations
//! of those capabilities for the wasm build.

pub mod browser;
pub mod toggler;
