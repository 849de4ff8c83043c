//! Error types for ezbp operations.
//!
//! This module defines [`EzbpError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Expansion failures (`TemplateNotFound`, `ReferencedTemplateNotFound`,
//!   `CyclicReference`, `Cancelled`, `Interaction`) abort the whole expansion
//! - Store and config errors carry the offending name or path
//! - Use `anyhow::Error` (via `EzbpError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ezbp operations.
#[derive(Debug, Error)]
pub enum EzbpError {
    /// The requested template does not exist.
    #[error("Unknown boilerplate '{name}'")]
    TemplateNotFound { name: String },

    /// A `[[name]]` reference points at a template that does not exist.
    #[error("Unknown referenced boilerplate '{name}'")]
    ReferencedTemplateNotFound { name: String },

    /// Expansion kept pulling in templates past the inclusion limit.
    #[error("Cyclic reference while expanding '{name}': gave up after {inclusions} inclusions")]
    CyclicReference { name: String, inclusions: usize },

    /// A template with this name already exists.
    #[error("Boilerplate '{name}' already exists")]
    AlreadyExists { name: String },

    /// Template name or body rejected by the store.
    #[error("Invalid boilerplate: {message}")]
    InvalidTemplate { message: String },

    /// The user dismissed a prompt or selection.
    #[error("Cancelled by user at '{label}'")]
    Cancelled { label: String },

    /// The interaction front-end failed.
    #[error("Interaction failed: {message}")]
    Interaction { message: String },

    /// Failed to parse a configuration or store file.
    #[error("Failed to parse {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The external editor exited unsuccessfully.
    #[error("Editor '{editor}' failed: {message}")]
    EditorFailed { editor: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ezbp operations.
pub type Result<T> = std::result::Result<T, EzbpError>;
