//! Upload driver for staged artifact groups.
//!
//! Resolves the project identifier, auth token and upload tool from the
//! environment (with a config-file fallback for the project), then
//! invokes the external tool once per staged group. Groups containing
//! Hermes bytecode are uploaded in content-addressed debug-id mode,
//! everything else by release tag.

mod driver;
mod env;
mod error;

pub use driver::upload_staged;
pub use env::{
    AUTH_TOKEN_ENV, DEFAULT_UPLOAD_BIN, PROJECT_CONFIG_FILE, PROJECT_ENV, UPLOAD_BIN_ENV,
    UploadEnv,
};
pub use error::UploadError;
