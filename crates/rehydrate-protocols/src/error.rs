//! Error types for the activation engine.

use thiserror::Error;

/// Errors surfaced by an activation pass.
///
/// An unregistered key is not an error: the loader logs a diagnostic and
/// skips it. Everything here aborts the remaining keys of the `load` call
/// that hit it.
#[derive(Debug, Error)]
pub enum ActivationError {
    /// The resolved module exposed no default-like export.
    #[error("no default export found trying to import component [{0}]")]
    MissingDefaultExport(String),

    /// The injected import resolver itself failed.
    #[error("import failed for component [{key}]: {message}")]
    ImportFailed { key: String, message: String },

    /// A component's lifecycle method failed.
    #[error("component [{key}] failed to activate: {message}")]
    Component { key: String, message: String },

    /// Free-form failure raised by component code.
    #[error("{0}")]
    Custom(String),
}
