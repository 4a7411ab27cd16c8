//! Recursive artifact collection.
//!
//! Walks a directory tree and keeps every entry the classifier
//! recognizes. The result is a set: traversal order is never exposed.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::classify::classify;
use crate::error::AssetError;

/// Collects all classified artifact paths under `root`, at any depth.
///
/// Fails with [`AssetError::DirectoryNotFound`] if the root does not
/// exist or cannot be read.
pub fn collect_artifacts(root: &Path) -> Result<BTreeSet<PathBuf>, AssetError> {
    // Probe the root eagerly so a bad argument reports as a missing
    // directory rather than a generic I/O error mid-walk.
    if let Err(source) = std::fs::read_dir(root) {
        return Err(AssetError::DirectoryNotFound {
            path: root.to_path_buf(),
            source,
        });
    }

    let mut found = BTreeSet::new();
    walk_dir(root, &mut found)?;
    Ok(found)
}

fn walk_dir(current: &Path, found: &mut BTreeSet<PathBuf>) -> Result<(), AssetError> {
    for entry in std::fs::read_dir(current)? {
        let entry = entry?;
        let path = entry.path();
        let metadata = entry.metadata()?;

        if metadata.is_dir() {
            walk_dir(&path, found)?;
        } else if metadata.is_file() {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if classify(name).is_some() {
                found.insert(path);
            }
        }
    }

    Ok(())
}
