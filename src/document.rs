//! Document surfaces that mirror the active mode.
//!
//! Two surfaces are written: the root element's theme attribute and the
//! toggle control's icon class. The root attribute is also read back on
//! every click, so the document stays the single source of truth.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ThemeError;
use crate::mode::ThemeMode;

/// DOM capability driven by [`crate::ThemeController`].
pub trait ThemeDocument {
    /// Current value of the root theme attribute, if set.
    fn theme_attribute(&self) -> Option<String>;

    fn set_theme_attribute(&self, value: &str);

    fn add_toggle_class(&self, class: &str);

    fn remove_toggle_class(&self, class: &str);

    /// Run `handler` on every click of the toggle control.
    ///
    /// Each call adds another listener; nothing deduplicates them.
    fn bind_toggle_click(&self, handler: Box<dyn Fn()>) -> Result<(), ThemeError>;

    /// Write `mode` to the root attribute and swap the toggle icon.
    fn apply_mode(&self, mode: ThemeMode) {
        self.set_theme_attribute(mode.as_str());
        self.remove_toggle_class(mode.toggled().icon_class());
        self.add_toggle_class(mode.icon_class());
    }
}

/// Live browser document: `<html>` plus the toggle element.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct DomDocument {
    root: web_sys::Element,
    toggle: web_sys::Element,
    attribute: String,
}

#[cfg(feature = "hydrate")]
impl DomDocument {
    /// Find the root element and the toggle control named by `config`.
    ///
    /// # Errors
    ///
    /// [`ThemeError::NoDocument`] outside a browser page,
    /// [`ThemeError::ToggleNotFound`] when the selector matches nothing.
    pub fn locate(config: &crate::config::ThemeConfig) -> Result<Self, ThemeError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ThemeError::NoDocument)?;
        let root = document.document_element().ok_or(ThemeError::NoDocument)?;
        let toggle = document
            .query_selector(&config.toggle_selector)
            .map_err(|e| ThemeError::Dom(format!("{e:?}")))?
            .ok_or_else(|| ThemeError::ToggleNotFound(config.toggle_selector.clone()))?;
        Ok(Self {
            root,
            toggle,
            attribute: config.attribute.clone(),
        })
    }
}

#[cfg(feature = "hydrate")]
impl ThemeDocument for DomDocument {
    fn theme_attribute(&self) -> Option<String> {
        self.root.get_attribute(&self.attribute)
    }

    fn set_theme_attribute(&self, value: &str) {
        let _ = self.root.set_attribute(&self.attribute, value);
    }

    fn add_toggle_class(&self, class: &str) {
        let _ = self.toggle.class_list().add_1(class);
    }

    fn remove_toggle_class(&self, class: &str) {
        let _ = self.toggle.class_list().remove_1(class);
    }

    fn bind_toggle_click(&self, handler: Box<dyn Fn()>) -> Result<(), ThemeError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| handler())
            as Box<dyn FnMut(web_sys::Event)>);
        self.toggle
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Dom(format!("{e:?}")))?;
        // Listener lives as long as the page.
        cb.forget();
        Ok(())
    }
}

/// In-memory document for native builds and tests.
///
/// Class edits follow `DOMTokenList` semantics: adding a present class or
/// removing an absent one changes nothing.
pub struct MemoryDocument {
    attribute: RefCell<Option<String>>,
    toggle: Option<RefCell<Vec<String>>>,
    handlers: RefCell<Vec<Rc<dyn Fn()>>>,
}

impl MemoryDocument {
    /// Document with an unset root attribute and an empty toggle control.
    pub fn new() -> Self {
        Self {
            attribute: RefCell::new(None),
            toggle: Some(RefCell::new(Vec::new())),
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Document whose toggle selector matches nothing.
    pub fn without_toggle() -> Self {
        Self {
            toggle: None,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_attribute(self, value: &str) -> Self {
        *self.attribute.borrow_mut() = Some(value.to_owned());
        self
    }

    pub fn attribute(&self) -> Option<String> {
        self.attribute.borrow().clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.toggle
            .as_ref()
            .map(|c| c.borrow().clone())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.toggle
            .as_ref()
            .is_some_and(|c| c.borrow().iter().any(|x| x == class))
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Dispatch a click to every bound handler, in bind order.
    pub fn click(&self) {
        let handlers: Vec<_> = self.handlers.borrow().iter().map(Rc::clone).collect();
        for handler in handlers {
            handler();
        }
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeDocument for MemoryDocument {
    fn theme_attribute(&self) -> Option<String> {
        self.attribute()
    }

    fn set_theme_attribute(&self, value: &str) {
        *self.attribute.borrow_mut() = Some(value.to_owned());
    }

    fn add_toggle_class(&self, class: &str) {
        let Some(classes) = &self.toggle else {
            return;
        };
        let mut classes = classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_toggle_class(&self, class: &str) {
        if let Some(classes) = &self.toggle {
            classes.borrow_mut().retain(|c| c != class);
        }
    }

    fn bind_toggle_click(&self, handler: Box<dyn Fn()>) -> Result<(), ThemeError> {
        if self.toggle.is_none() {
            return Err(ThemeError::ToggleNotFound(
                crate::config::TOGGLE_SELECTOR.to_owned(),
            ));
        }
        self.handlers.borrow_mut().push(Rc::from(handler));
        Ok(())
    }
}
