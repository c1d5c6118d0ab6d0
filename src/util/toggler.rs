//! Theme switching behind injected side-effect capabilities.
//!
//! DESIGN
//! ======
//! The switch has exactly two side effects: a document-level attribute the
//! CSS reads, and a persisted preference the next visit reads. Both are
//! behind traits so the sequencing logic here runs under plain `#[test]`
//! against fakes; the real implementations live in [`crate::util::browser`].
//!
//! TRADE-OFFS
//! ==========
//! Both effects are fire-and-forget. A storage write that fails (quota,
//! disabled storage) loses only the remembered preference; the visible
//! theme already changed, which is the part the reader cares about.

#[cfg(test)]
#[path = "toggler_test.rs"]
mod toggler_test;

use crate::state::theme::Theme;

/// Where the active theme is made visible (the document attribute).
pub trait ThemeSink {
    /// Make `theme` the displayed theme. Best-effort; never fails loudly.
    fn apply(&self, theme: Theme);
}

/// Where the theme preference survives between visits.
pub trait PreferenceStore {
    /// The stored preference, if one exists and parses.
    fn load(&self) -> Option<Theme>;
    /// Remember `theme`, overwriting any prior value. Best-effort.
    fn store(&self, theme: Theme);
}

/// Couples a [`ThemeSink`] and a [`PreferenceStore`] into the two
/// operations the page needs: startup resolution and the click handler.
#[derive(Clone, Copy, Debug)]
pub struct ThemeToggler<S, P> {
    sink: S,
    prefs: P,
}

impl<S: ThemeSink, P: PreferenceStore> ThemeToggler<S, P> {
    pub fn new(sink: S, prefs: P) -> Self {
        Self { sink, prefs }
    }

    /// Resolve and apply the starting theme for this page load.
    ///
    /// The stored preference wins; `fallback` covers first visits and
    /// cleared storage (the browser wiring passes the system preference).
    /// The resolved theme is applied to the sink but not written back to
    /// the store — only an explicit toggle records a preference.
    pub fn initial(&self, fallback: Theme) -> Theme {
        let theme = self.prefs.load().unwrap_or(fallback);
        self.sink.apply(theme);
        theme
    }

    /// Switch to `next`: apply it, persist it, and return the theme the
    /// trigger label must now show (the one the reader would switch to).
    pub fn activate(&self, next: Theme) -> Theme {
        self.sink.apply(next);
        self.prefs.store(next);
        next.opposite()
    }
}
