//! Light/dark theme preference.
//!
//! The preference lives for a browser session only; the server keeps it in a
//! session cookie and renders it as a `data-theme` attribute on `<html>`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Color theme. Unknown or missing values resolve to [`Theme::Light`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolve a stored preference. Anything other than `"dark"` is light.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph for the toggle button: a moon offers dark, a sun offers light.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}
