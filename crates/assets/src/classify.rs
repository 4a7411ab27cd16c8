//! Artifact classification by file extension.

use std::path::Path;

/// Extension marking a sourcemap (without the leading dot).
pub const SOURCEMAP_EXT: &str = "map";

/// Extensions marking a JavaScript bundle script.
pub const BUNDLE_EXTS: &[&str] = &["js", "bundle"];

/// Extension marking a compiled Hermes bytecode file.
pub const BYTECODE_EXT: &str = "hbc";

/// Kind of build artifact relevant to symbolication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    SourceMap,
    Bundle,
    Bytecode,
}

/// Classifies a file name by its extension.
///
/// Returns `None` for anything that is not a sourcemap, a bundle script
/// or a bytecode file. Pure, no error cases.
pub fn classify(file_name: &str) -> Option<ArtifactKind> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext == SOURCEMAP_EXT {
        Some(ArtifactKind::SourceMap)
    } else if BUNDLE_EXTS.contains(&ext) {
        Some(ArtifactKind::Bundle)
    } else if ext == BYTECODE_EXT {
        Some(ArtifactKind::Bytecode)
    } else {
        None
    }
}

/// Whether the path's extension marks it as a sourcemap.
pub fn is_sourcemap(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SOURCEMAP_EXT)
}
