//! Errors surfaced by theme initialization.
//!
//! Storage that is missing or disabled is not represented here: it is a
//! normal branch handled inside [`crate::store`], never a failure.

/// Error returned by [`crate::controller::ThemeController::initialize`] and
/// by mode parsing.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// No `window.document` or no root element to carry the theme attribute.
    #[error("document root element is not available")]
    NoDocument,
    /// The toggle control selector matched nothing.
    #[error("theme toggle control not found: {0}")]
    ToggleNotFound(String),
    /// A string that is neither `dark` nor `light`.
    #[error("unknown theme mode: {0}")]
    UnknownMode(String),
    /// The DOM rejected an operation (invalid selector, listener failure).
    #[error("dom error: {0}")]
    Dom(String),
}
