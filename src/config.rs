//! Names the controller reads and writes.
//!
//! Defaults match the markup emitted by the site templates: an `<html>` root
//! carrying `data-theme` and a `#toggle-theme` button with a moon/sun icon.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::mode::ThemeMode;

pub const STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const TOGGLE_SELECTOR: &str = "#toggle-theme";

/// Storage key, DOM names, and fallback mode for a [`crate::ThemeController`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    /// `localStorage` key holding the preference.
    pub storage_key: String,
    /// Attribute on the document root that mirrors the mode.
    pub attribute: String,
    /// CSS selector of the toggle control.
    pub toggle_selector: String,
    /// Mode used when nothing usable is stored.
    pub default_mode: ThemeMode,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            attribute: THEME_ATTRIBUTE.to_owned(),
            toggle_selector: TOGGLE_SELECTOR.to_owned(),
            default_mode: ThemeMode::Dark,
        }
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    #[must_use]
    pub fn with_toggle_selector(mut self, selector: impl Into<String>) -> Self {
        self.toggle_selector = selector.into();
        self
    }

    #[must_use]
    pub fn with_default_mode(mut self, mode: ThemeMode) -> Self {
        self.default_mode = mode;
        self
    }
}
