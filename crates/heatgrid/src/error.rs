//! Error types for Heatgrid operations.
//!
//! This module provides the main error type [`HeatgridError`] which wraps
//! the error conditions that can occur at the edges of the pipeline. The
//! layout engine itself never fails; missing data renders as empty cells.

use std::io;

use thiserror::Error;

/// The main error type for Heatgrid operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the dataset source alongside the TOML error so
/// that the error span can be shown in context.
#[derive(Debug, Error)]
pub enum HeatgridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid dataset: {err}")]
    Parse { err: toml::de::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for HeatgridError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl HeatgridError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
