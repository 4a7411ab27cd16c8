//! Deployment update manifest.
//!
//! The build pipeline writes `eas-update-metadata.json` next to the
//! compiled artifacts, describing one update per target platform. The
//! manifest is trusted verbatim: records get no semantic validation
//! here, only shape validation through deserialization.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name of the update manifest, relative to the artifact root.
pub const MANIFEST_FILE_NAME: &str = "eas-update-metadata.json";

/// One platform-specific deployment update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecord {
    /// Unique update identifier within the manifest.
    pub id: String,
    /// Target platform, expected to occur as a substring of exactly one
    /// artifact group key.
    pub platform: String,
    /// Runtime version label, used as the release identifier on upload.
    pub runtime_version: String,
}

/// The deployment metadata manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateManifest {
    pub updates: Vec<UpdateRecord>,
}

/// Errors produced while loading the update manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest is written by a known-version build pipeline, so
    /// its absence signals a version mismatch, not an empty build.
    #[error("update manifest not found at {path} (was the build produced by a compatible pipeline?)")]
    Missing { path: PathBuf },

    #[error("malformed update manifest: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl UpdateManifest {
    /// Loads and parses the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.is_file() {
            return Err(ManifestError::Missing {
                path: path.to_path_buf(),
            });
        }
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Resolves the manifest path under an artifact root directory.
    pub fn manifest_path(root: &Path) -> PathBuf {
        root.join(MANIFEST_FILE_NAME)
    }
}
