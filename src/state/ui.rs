//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Presentation state lives in one struct behind a context `RwSignal` so
//! components read and update it without threading props. Today the blog's
//! only chrome is the theme; the struct leaves room for more.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::theme::Theme;

/// UI state shared across page chrome components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Active visual theme. The toggle button shows its opposite.
    pub theme: Theme,
}
