//! Display mode value shared by the store, the document, and the controller.
//!
//! DESIGN
//! ======
//! The page only ever shows one of two modes. Anything read from storage or
//! from the DOM is funneled through [`ThemeMode::parse`] so a third state
//! cannot leak into the controller.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// Active page theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Value written to the `data-theme` attribute and to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Icon class shown on the toggle control while this mode is active.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "icon-moon",
            Self::Light => "icon-sun",
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Parse an exact `"dark"` / `"light"` string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ThemeError::UnknownMode(s.to_owned()))
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
