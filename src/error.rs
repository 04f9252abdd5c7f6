//! Error taxonomy for extraction.
//!
//! Per-file failures (`Syntax`, `Read`, `Extraction`) are recoverable: the
//! offending file is skipped, a warning goes through the reporter, and the
//! repository run continues. `InvalidRoot` is fatal and surfaces immediately.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Source text does not parse as Python.
    #[error("syntax error in {path} at {line}:{column}: {message}")]
    Syntax {
        path: String,
        line: u32,
        column: u32,
        message: String,
    },

    /// The file could not be read or decoded as UTF-8.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Any other failure while walking or extracting a specific file.
    #[error("extraction failed for {path}: {message}")]
    Extraction { path: String, message: String },

    /// The repository root does not exist or is not a directory.
    #[error("invalid repository root: {}", path.display())]
    InvalidRoot { path: PathBuf },
}

impl ExtractError {
    /// Whether a repository run may continue past this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ExtractError::InvalidRoot { .. })
    }
}
