//! Error types for drawmaid operations.
//!
//! Parsing itself never fails; problems in the flowchart text are reported as
//! [`Diagnostic`](drawmaid_parser::error::Diagnostic)s. [`DrawmaidError`]
//! covers what can go wrong around it: I/O, an unusable layout configuration
//! and document export.

use std::io;

use thiserror::Error;

/// The main error type for drawmaid operations.
#[derive(Debug, Error)]
pub enum DrawmaidError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for DrawmaidError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
