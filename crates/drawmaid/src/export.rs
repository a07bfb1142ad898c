//! Export functionality for drawmaid diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting laid-out diagrams into output documents. It is the final stage
//! in the drawmaid processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! Semantic Model
//!     ↓ layout
//! Positioned Nodes (Layout)
//!     ↓ export (this module)
//! Document
//! ```
//!
//! # Available Backends
//!
//! - [`drawio`] - draw.io `mxfile` XML via [`drawio::DrawioBuilder`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`DrawmaidError::Export`] at the crate
//! boundary.
//!
//! [`DrawmaidError::Export`]: crate::DrawmaidError::Export

/// draw.io export backend.
pub mod drawio;

use std::{fs, path::Path};

use crate::layout::Layout;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Exports a layout to the backend's document format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout does not match the diagram
    /// being exported.
    fn export_layout(&self, layout: &Layout) -> Result<String, Error>;

    /// Exports a layout and writes the document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written, in addition to the
    /// errors of [`Exporter::export_layout`].
    fn export_to_path(&self, layout: &Layout, path: &Path) -> Result<(), Error> {
        let document = self.export_layout(layout)?;
        fs::write(path, document)?;
        Ok(())
    }
}

/// Errors that can occur during diagram export.
///
/// This type is converted into [`DrawmaidError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`DrawmaidError::Export`]: crate::DrawmaidError::Export
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

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
