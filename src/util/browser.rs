//! web-sys implementations of the theme capabilities.
//!
//! TRADE-OFFS
//! ==========
//! Everything here is best-effort browser-only behavior; outside the `csr`
//! build (native tests) every function is a safe no-op so callers never
//! need their own gating.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use crate::state::theme::Theme;
use crate::util::toggler::{PreferenceStore, ThemeSink, ThemeToggler};

/// localStorage key holding the remembered theme name.
#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "rodolfo-blog-theme";

/// Sets `data-theme` on `<body>`, the attribute the site CSS keys off.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSink;

impl ThemeSink for DocumentSink {
    fn apply(&self, theme: Theme) {
        #[cfg(feature = "csr")]
        {
            if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let _ = body.set_attribute("data-theme", theme.as_str());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }
}

/// Reads and writes the theme preference in localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn load(&self) -> Option<Theme> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
            let parsed = Theme::parse(&raw);
            if parsed.is_none() {
                log::warn!("ignoring unrecognized stored theme {raw:?}");
            }
            parsed
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn store(&self, theme: Theme) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(STORAGE_KEY, theme.as_str());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }
}

/// The OS-level color preference, used when no theme is stored.
///
/// Defaults to [`Theme::Light`] when the media query is unavailable.
pub fn system_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Light
    }
}

/// The toggler wired to the real document and storage.
pub type BrowserToggler = ThemeToggler<DocumentSink, LocalStore>;

/// Build the browser-wired toggler.
pub fn toggler() -> BrowserToggler {
    ThemeToggler::new(DocumentSink, LocalStore)
}
