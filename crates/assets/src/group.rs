//! Artifact grouping.
//!
//! A group is every file representing one logical build output: a
//! bundle script or bytecode file plus its sourcemap. The group key for
//! a sourcemap is its path with the `.map` extension stripped, so
//! `app.js.map` groups under `app.js`; any other file keys by its own
//! full path. Two bundles therefore never share a group unless one is
//! the other's sourcemap.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::classify::{BYTECODE_EXT, is_sourcemap};

/// Groups of artifact paths keyed by logical output name.
///
/// Keys are sorted, so iteration over groups is deterministic.
pub type ArtifactGroups = BTreeMap<String, Vec<PathBuf>>;

/// Partitions artifact paths into logical groups.
///
/// Every input path lands in exactly one group; append order within a
/// group follows input encounter order. Grouping the same set twice
/// yields identical groups.
pub fn group_artifacts<I>(paths: I) -> ArtifactGroups
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut groups = ArtifactGroups::new();
    for path in paths {
        groups.entry(group_key(&path)).or_default().push(path);
    }
    groups
}

/// Whether any file in a group is a compiled bytecode file.
pub fn contains_bytecode(files: &[PathBuf]) -> bool {
    files
        .iter()
        .any(|p| p.extension().and_then(|e| e.to_str()) == Some(BYTECODE_EXT))
}

fn group_key(path: &Path) -> String {
    if is_sourcemap(path) {
        path.with_extension("").to_string_lossy().into_owned()
    } else {
        path.to_string_lossy().into_owned()
    }
}
