//! Scratch directory lifecycle.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::StagingError;

/// Scratch directory name under the artifact root.
pub const SCRATCH_DIR_NAME: &str = ".tmp";

/// Staging directory for renamed artifact copies.
///
/// Prepared fresh at the start of every run: stale contents from a
/// previous, possibly crashed run are removed before the source
/// directory is walked, so they can never leak into a grouping pass.
/// The directory is left in place at the end of the run for inspection.
#[derive(Debug)]
pub struct ScratchArea {
    dir: PathBuf,
}

impl ScratchArea {
    /// Deletes any previous scratch directory under `root` and creates
    /// an empty one.
    ///
    /// Deletion is best-effort: a failed delete is logged and only
    /// becomes fatal if the directory cannot be created afterwards.
    pub fn prepare(root: &Path) -> Result<Self, StagingError> {
        let dir = root.join(SCRATCH_DIR_NAME);

        match std::fs::remove_dir_all(&dir) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "failed to clear scratch directory");
            }
        }
        std::fs::create_dir_all(&dir)?;

        Ok(Self { dir })
    }

    /// Path of the scratch directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
