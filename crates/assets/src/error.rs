//! Asset discovery error types.

use std::path::PathBuf;

/// Errors produced while discovering build artifacts.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("directory not found or unreadable: {path}")]
    DirectoryNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
