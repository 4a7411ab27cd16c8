//! Upload error types.

use std::process::ExitStatus;

use symdeploy_assets::AssetError;

/// Errors produced while resolving the upload environment or driving
/// the external upload tool.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error(
        "no project identifier: set {env} or add a \"project\" field to {file}",
        env = crate::env::PROJECT_ENV,
        file = crate::env::PROJECT_CONFIG_FILE
    )]
    MissingProject,

    #[error("no auth token: set {}", crate::env::AUTH_TOKEN_ENV)]
    MissingAuthToken,

    #[error("staged group {group} has no runtime version mapping")]
    MissingRuntimeMapping { group: String },

    #[error("failed to spawn upload tool {tool}: {source}")]
    SpawnFailed {
        tool: String,
        source: std::io::Error,
    },

    #[error("upload of group {group} failed: {status}")]
    UploadFailed { group: String, status: ExitStatus },

    #[error(transparent)]
    Asset(#[from] AssetError),
}
