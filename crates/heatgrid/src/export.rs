//! Export functionality for Heatgrid heatmaps.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a laid-out heatmap into an output format. It is the final stage
//! in the Heatgrid processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Dataset (TOML)
//!     ↓ parse
//! Dataset + Presenter
//!     ↓ layout (LayoutEngine)
//! Presentation cache + grid geometry
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`HeatgridError::Export`] at the crate
//! boundary.
//!
//! [`HeatgridError::Export`]: crate::HeatgridError::Export

/// SVG export backend.
pub mod svg;

use heatgrid_core::engine::LayoutEngine;

/// Abstraction for heatmap export backends.
pub trait Exporter {
    /// Exports the current state of a layout engine.
    ///
    /// # Arguments
    ///
    /// * `engine` - The engine holding the presentation cache and geometry to export.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the heatmap cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_engine(&mut self, engine: &LayoutEngine) -> Result<(), Error>;
}

/// Errors that can occur during heatmap export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
