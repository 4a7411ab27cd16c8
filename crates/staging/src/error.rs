//! Staging error types.

use std::path::PathBuf;

/// Errors produced while staging artifact groups.
#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error("failed to copy {path} into the scratch area: {source}")]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
