//! Theme controller: resolve the stored preference, mirror it into the
//! document, and flip it on every toggle click.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller owns no mode of its own. At startup it resolves a mode from
//! storage (or the configured default) and writes it to the document. On each
//! click it reads the mode back from the document attribute, writes the
//! opposite mode, and persists it. Storage and document are injected so the
//! same logic runs against `localStorage`/DOM in the browser and against
//! in-memory fakes natively.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::rc::{Rc, Weak};

use crate::config::ThemeConfig;
use crate::document::ThemeDocument;
use crate::error::ThemeError;
use crate::mode::ThemeMode;
use crate::store::PreferenceStore;

/// Theme controller over an injected preference store and document.
pub struct ThemeController<S, D> {
    config: ThemeConfig,
    store: S,
    document: D,
}

impl<S: PreferenceStore, D: ThemeDocument> ThemeController<S, D> {
    pub fn new(config: ThemeConfig, store: S, document: D) -> Self {
        Self {
            config,
            store,
            document,
        }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Stored mode if storage is available and holds a valid value,
    /// otherwise the configured default.
    ///
    /// A stored string other than `dark`/`light` counts as absent; it is
    /// never copied into the document.
    pub fn resolve_mode(&self) -> ThemeMode {
        self.store
            .get_preference(&self.config.storage_key)
            .and_then(|v| ThemeMode::parse(&v))
            .unwrap_or(self.config.default_mode)
    }

    /// Mode currently shown by the document, if the attribute holds one.
    pub fn current_mode(&self) -> Option<ThemeMode> {
        self.document
            .theme_attribute()
            .and_then(|v| ThemeMode::parse(&v))
    }

    /// Write `mode` to storage. Silently skipped when storage is unavailable.
    pub fn persist(&self, mode: ThemeMode) {
        self.store
            .set_preference(&self.config.storage_key, mode.as_str());
    }

    /// Flip the mode shown by the document and persist the new one.
    ///
    /// Anything other than `dark` in the attribute (including no attribute)
    /// counts as light, so the result is always dark in that case.
    pub fn on_toggle_click(&self) -> ThemeMode {
        let next = match self.current_mode() {
            Some(ThemeMode::Dark) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        };
        self.document.apply_mode(next);
        self.persist(next);
        log::debug!("theme toggled to {next}");
        next
    }
}

impl<S, D> ThemeController<S, D>
where
    S: PreferenceStore + 'static,
    D: ThemeDocument + 'static,
{
    /// Start handling toggle clicks, then apply the resolved mode.
    ///
    /// The click handler holds only a weak reference: the caller keeps the
    /// returned `Rc` alive for as long as clicks should be handled. Calling
    /// this twice binds a second handler.
    ///
    /// # Errors
    ///
    /// Fails when the document cannot bind the toggle click handler. The
    /// document is left untouched in that case.
    pub fn initialize(self: &Rc<Self>) -> Result<ThemeMode, ThemeError> {
        let controller: Weak<Self> = Rc::downgrade(self);
        self.document
            .bind_toggle_click(Box::new(move || {
                if let Some(controller) = controller.upgrade() {
                    controller.on_toggle_click();
                }
            }))
            .map_err(|e| match e {
                ThemeError::ToggleNotFound(_) => {
                    ThemeError::ToggleNotFound(self.config.toggle_selector.clone())
                }
                other => other,
            })?;

        let mode = self.resolve_mode();
        self.document.apply_mode(mode);
        log::debug!("theme initialized as {mode}");
        Ok(mode)
    }
}
