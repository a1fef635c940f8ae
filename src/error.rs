//! Error types for autotext operations.
//!
//! This module defines [`AutotextError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `AutotextError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via [`AutotextError::Other`]) for unexpected errors
//! - Errors never escape the per-frame path: source-read failures are logged
//!   and absorbed, leaving the last good cached value in place

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for autotext operations.
#[derive(Debug, Error)]
pub enum AutotextError {
    /// The text source could not be opened or read.
    #[error("Failed to read text source {path:?}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid stage parameters.
    #[error("Invalid stage configuration: {message}")]
    Config { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for autotext operations.
pub type Result<T> = std::result::Result<T, AutotextError>;
