//! Pipeline orchestration: walk, group, correlate, stage, upload.

use std::path::Path;

use symdeploy_assets::{AssetError, collect_artifacts, group_artifacts};
use symdeploy_manifest::{ManifestError, UpdateManifest};
use symdeploy_staging::{ScratchArea, StagingError, correlate};
use symdeploy_uploader::{UploadEnv, UploadError, upload_staged};
use tracing::info;

/// Errors aborting a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Staging(#[from] StagingError),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

/// Runs the full upload pipeline over an artifact root directory.
///
/// The upload environment resolves first, so configuration errors abort
/// before anything on disk is touched. The scratch area is then cleared
/// before the source walk, keeping stale files from a previous run out
/// of the grouping pass.
pub fn run(root: &Path) -> Result<(), PipelineError> {
    let env = UploadEnv::resolve(root)?;

    let scratch = ScratchArea::prepare(root)?;
    let artifacts = collect_artifacts(root)?;
    let groups = group_artifacts(artifacts);
    info!(groups = groups.len(), "grouped build artifacts");

    let manifest = UpdateManifest::load(&UpdateManifest::manifest_path(root))?;
    let runtimes = correlate(&groups, &manifest.updates, &scratch)?;

    upload_staged(scratch.dir(), &runtimes, &env)?;
    info!(uploads = runtimes.len(), "upload pipeline finished");
    Ok(())
}
