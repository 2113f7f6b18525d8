//! Error types for jobdeck operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used
//! across all jobdeck crates. Uses `thiserror` for derive macros.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur in jobdeck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error with the path that caused it.
    #[error("I/O error at {path}: {source}")]
    IoPath {
        source: std::io::Error,
        path: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid data or format.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HTTP request failure.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create an HTTP error.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Wrap an I/O error together with the path it occurred at.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Self::IoPath {
            source,
            path: path.display().to_string(),
        }
    }
}

/// Result type alias using jobdeck's Error type.
pub type Result<T> = std::result::Result<T, Error>;
