//! Client state modules shared through Leptos context.

pub mod theme;
pub mod ui;
