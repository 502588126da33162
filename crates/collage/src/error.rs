//! Error types for collage operations.
//!
//! This module provides the main error type [`CollageError`] which wraps
//! the error conditions that can occur while loading projects, importing
//! images, and exporting collages. Layout itself never fails: degenerate
//! input produces an empty or partial [`Arrangement`](crate::layout::Arrangement).

use std::io;

use thiserror::Error;

/// The main error type for collage operations.
#[derive(Debug, Error)]
pub enum CollageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A project document that is not valid JSON or misses required keys.
    #[error("Invalid project: {0}")]
    Project(String),

    /// A source image that is unsupported, too large, or unreadable.
    #[error("Image error: {0}")]
    Image(String),

    #[error("Style error: {0}")]
    Style(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<crate::export::Error> for CollageError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl From<serde_json::Error> for CollageError {
    fn from(error: serde_json::Error) -> Self {
        Self::Project(error.to_string())
    }
}
