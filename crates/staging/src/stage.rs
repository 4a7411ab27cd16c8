//! Staged copies of one matched artifact group.

use std::path::PathBuf;

use symdeploy_assets::{SOURCEMAP_EXT, is_sourcemap};
use tracing::debug;

use crate::error::StagingError;
use crate::scratch::ScratchArea;

/// Copies every file of a matched group into the scratch area.
///
/// The sourcemap keeps its `.map` extension on top of the new group
/// name; every other file is renamed to exactly `new_name`, so the new
/// name becomes the group key of the second grouping pass.
pub fn stage_group(
    scratch: &ScratchArea,
    files: &[PathBuf],
    new_name: &str,
) -> Result<(), StagingError> {
    // Idempotent: the scratch root exists, the subtree may not yet.
    std::fs::create_dir_all(scratch.dir())?;

    for file in files {
        let staged_name = if is_sourcemap(file) {
            format!("{new_name}.{SOURCEMAP_EXT}")
        } else {
            new_name.to_string()
        };
        let dest = scratch.dir().join(&staged_name);

        std::fs::copy(file, &dest).map_err(|source| StagingError::Copy {
            path: file.clone(),
            source,
        })?;
        debug!(from = %file.display(), to = %dest.display(), "staged artifact");
    }

    Ok(())
}
