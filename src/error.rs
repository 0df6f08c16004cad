//! Error types for the blogpack document pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Structural pipeline errors.
///
/// Per-file read failures are deliberately not represented here: they are
/// recovered in place with a placeholder block (see [`crate::content`]) and
/// never abort the run. Everything in this enum propagates to the process
/// boundary and terminates with a non-zero exit.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("Cannot read base directory {path}: {source}")]
    BaseDirUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write output file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}
