//! Reading the flowchart source named on the command line.

use std::{fs, io, path::PathBuf};

use log::debug;
use thiserror::Error;

use drawmaid::DrawmaidError;

use crate::Args;

/// Input-related errors for CLI
#[derive(Debug, Error)]
pub enum InputError {
    #[error("No input given; pass --input-file or --input-string")]
    Missing,

    #[error("Both --input-file and --input-string given; pass only one")]
    Conflicting,

    #[error("Input is empty")]
    Empty,

    #[error("Failed to read input file {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

impl From<InputError> for DrawmaidError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::Io { source, .. } => DrawmaidError::Io(source),
            other => DrawmaidError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                other.to_string(),
            )),
        }
    }
}

/// Return the flowchart text selected by `args`.
///
/// # Errors
///
/// Returns an error if neither or both input options are set, if the input
/// file cannot be read, or if the text contains only whitespace.
pub fn read_source(args: &Args) -> Result<String, InputError> {
    let source = match (&args.input_file, &args.input_string) {
        (Some(_), Some(_)) => return Err(InputError::Conflicting),
        (None, None) => return Err(InputError::Missing),
        (Some(path), None) => {
            debug!(path = path.as_str(); "Reading input file");
            fs::read_to_string(path).map_err(|source| InputError::Io {
                path: PathBuf::from(path),
                source,
            })?
        }
        (None, Some(text)) => text.clone(),
    };

    if source.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(source)
}
