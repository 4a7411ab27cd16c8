//! Upload environment resolution.
//!
//! The project identifier and auth token come from environment
//! variables; the project can also fall back to a JSON config file in
//! the artifact root. Resolution happens before any filesystem
//! mutation, so a misconfigured run aborts with nothing touched.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::UploadError;

/// Environment variable carrying the project identifier.
pub const PROJECT_ENV: &str = "SYMDEPLOY_PROJECT";

/// Environment variable carrying the auth token.
pub const AUTH_TOKEN_ENV: &str = "SYMDEPLOY_AUTH_TOKEN";

/// Environment variable overriding the upload tool binary.
pub const UPLOAD_BIN_ENV: &str = "SYMDEPLOY_UPLOAD_BIN";

/// Default upload tool binary name.
pub const DEFAULT_UPLOAD_BIN: &str = "sourcemap-upload";

/// Config file checked for a project identifier fallback, relative to
/// the artifact root.
pub const PROJECT_CONFIG_FILE: &str = "upload.config.json";

/// Resolved upload configuration.
#[derive(Debug, Clone)]
pub struct UploadEnv {
    pub project: String,
    pub auth_token: String,
    /// Upload tool binary name or path.
    pub tool: String,
}

#[derive(Debug, Deserialize)]
struct ProjectConfig {
    project: Option<String>,
}

impl UploadEnv {
    /// Resolves the upload environment for a run over `root`.
    ///
    /// The project comes from [`PROJECT_ENV`], falling back to the
    /// `project` field of `<root>/upload.config.json`; the token only
    /// from [`AUTH_TOKEN_ENV`]. Either missing is fatal.
    pub fn resolve(root: &Path) -> Result<Self, UploadError> {
        let project = match non_empty_env(PROJECT_ENV) {
            Some(p) => p,
            None => {
                let p = project_from_config(root).ok_or(UploadError::MissingProject)?;
                debug!(project = %p, "project identifier resolved from config file");
                p
            }
        };
        let auth_token = non_empty_env(AUTH_TOKEN_ENV).ok_or(UploadError::MissingAuthToken)?;
        let tool =
            non_empty_env(UPLOAD_BIN_ENV).unwrap_or_else(|| DEFAULT_UPLOAD_BIN.to_string());

        Ok(Self {
            project,
            auth_token,
            tool,
        })
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

pub(crate) fn project_from_config(root: &Path) -> Option<String> {
    let data = std::fs::read_to_string(root.join(PROJECT_CONFIG_FILE)).ok()?;
    let config: ProjectConfig = serde_json::from_str(&data).ok()?;
    config.project.filter(|p| !p.is_empty())
}
