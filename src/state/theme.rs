//! The two-value theme domain: `Light`, `Dark`, and the toggle between them.
//!
//! DESIGN
//! ======
//! The theme is a closed enum rather than a string-keyed lookup, so the
//! flip is a total function and no unrecognized value can reach the toggle
//! path. Raw text only appears at the edges (stored preference, attribute
//! value) and is parsed through [`Theme::parse`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme applied to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl Theme {
    /// The other theme — `Light → Dark`, `Dark → Light`.
    ///
    /// Total by construction; this is the fixed toggle mapping for the
    /// lifetime of the page.
    pub fn opposite(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Canonical lowercase name, used for the `data-theme` attribute, the
    /// stored preference value, and the button label.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a raw theme name, tolerating surrounding whitespace and case.
    ///
    /// Returns `None` for anything other than `light`/`dark`; callers treat
    /// that as an absent preference.
    pub fn parse(raw: &str) -> Option<Theme> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("light") {
            Some(Theme::Light)
        } else if trimmed.eq_ignore_ascii_case("dark") {
            Some(Theme::Dark)
        } else {
            None
        }
    }
}
