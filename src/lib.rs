//! # onepage-theme
//!
//! Light/dark mode toggle for generated site pages, compiled to WASM.
//!
//! On load the stored preference (`localStorage["theme"]`, default `dark`) is
//! written to `<html data-theme>` and the `#toggle-theme` button gets the
//! matching `icon-moon`/`icon-sun` class. Each click flips both and stores the
//! new mode. Storage and DOM access sit behind [`PreferenceStore`] and
//! [`ThemeDocument`] so the controller runs natively in tests.

pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod mode;
pub mod store;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use document::{MemoryDocument, ThemeDocument};
pub use error::ThemeError;
pub use mode::ThemeMode;
pub use store::{MemoryStore, PreferenceStore};

#[cfg(feature = "hydrate")]
pub use document::DomDocument;
#[cfg(feature = "hydrate")]
pub use store::LocalStorage;

/// Locate the page elements and start the theme controller.
///
/// Clicks are handled only while the returned controller is alive.
///
/// # Errors
///
/// Fails fast when the document root or the toggle control is missing.
#[cfg(feature = "hydrate")]
pub fn mount(
    config: ThemeConfig,
) -> Result<std::rc::Rc<ThemeController<LocalStorage, DomDocument>>, ThemeError> {
    let document = DomDocument::locate(&config)?;
    let controller = std::rc::Rc::new(ThemeController::new(config, LocalStorage, document));
    controller.initialize()?;
    Ok(controller)
}

/// WASM entry point, run when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second logger install (module loaded twice) is harmless.
    let _ = console_log::init_with_level(log::Level::Debug);

    match mount(ThemeConfig::default()) {
        // Controller lives as long as the page.
        Ok(controller) => std::mem::forget(controller),
        Err(e) => log::warn!("theme toggle disabled: {e}"),
    }
}
