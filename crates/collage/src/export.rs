//! Export functionality for collages.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a laid-out [`Scene`] into an output format, plus the output
//! size computation shared by every backend. It is the final stage in the
//! collage pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Project
//!     ↓ canvas framing + layout
//! Arrangement
//!     ↓ per-image transforms
//! Scene
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering invalid output sizes,
//! rendering failures and I/O errors. [`Error`] converts into
//! [`CollageError::Export`] at the crate boundary.
//!
//! [`CollageError::Export`]: crate::CollageError::Export

mod resolution;
mod scene;
/// SVG export backend.
pub mod svg;

pub use resolution::{A4_HEIGHT, A4_WIDTH, ExportFormat, OutputResolution, target_size};
pub use scene::{Scene, SceneImage};

/// Abstraction for collage export backends.
///
/// Implementors convert a [`Scene`] into a specific output format
/// (e.g., SVG).
///
/// See the [`svg`] module for the built-in SVG implementation.
pub trait Exporter {
    /// Exports a scene to the backend's output format.
    ///
    /// # Arguments
    ///
    /// * `scene` - The framed canvas with its placed images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if the requested output size is not
    /// usable, [`Error::Render`] if the scene cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_scene(&mut self, scene: &Scene) -> Result<(), Error>;
}

/// Errors that can occur during collage export.
///
/// This type is converted into [`CollageError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`CollageError::Export`]: crate::CollageError::Export
#[derive(Debug)]
pub enum Error {
    /// The computed output size is zero, negative, or not finite.
    InvalidSize(String),
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSize(msg) => write!(f, "Invalid output size: {msg}"),
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSize(_) | Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
