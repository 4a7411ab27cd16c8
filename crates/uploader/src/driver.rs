//! External upload tool invocation, one run per staged group.

use std::path::Path;
use std::process::Command;

use symdeploy_assets::{collect_artifacts, contains_bytecode, group_artifacts};
use symdeploy_staging::RuntimeMap;
use tracing::info;

use crate::env::{AUTH_TOKEN_ENV, UploadEnv};
use crate::error::UploadError;

/// Re-groups the scratch directory and uploads each group.
///
/// Every staged group is uploaded with its runtime version as the
/// release identifier; groups containing a bytecode file additionally
/// get the content-addressed debug-id flag. A missing runtime mapping
/// means the correlator and the scratch contents disagree and is fatal.
/// The first non-zero tool exit aborts the remaining groups; groups
/// already uploaded are not rolled back.
pub fn upload_staged(
    scratch_root: &Path,
    runtimes: &RuntimeMap,
    env: &UploadEnv,
) -> Result<(), UploadError> {
    let artifacts = collect_artifacts(scratch_root)?;
    let groups = group_artifacts(artifacts);

    for (key, files) in &groups {
        // Keys of the second pass are full staged paths; the runtime
        // map is keyed by the bare staged group name.
        let group_name = Path::new(key)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(key.as_str());
        let runtime = runtimes
            .get(group_name)
            .ok_or_else(|| UploadError::MissingRuntimeMapping {
                group: group_name.to_string(),
            })?;
        let is_hermes = contains_bytecode(files);

        info!(
            group = %group_name,
            release = %runtime,
            hermes = is_hermes,
            files = files.len(),
            "uploading artifact group"
        );

        let mut cmd = Command::new(&env.tool);
        cmd.arg("upload")
            .arg("--project")
            .arg(&env.project)
            .arg("--release")
            .arg(runtime);
        if is_hermes {
            cmd.arg("--debug-id");
        }
        cmd.args(files);
        cmd.env(AUTH_TOKEN_ENV, &env.auth_token);

        let status = cmd.status().map_err(|source| UploadError::SpawnFailed {
            tool: env.tool.clone(),
            source,
        })?;
        if !status.success() {
            return Err(UploadError::UploadFailed {
                group: group_name.to_string(),
                status,
            });
        }
    }

    Ok(())
}
