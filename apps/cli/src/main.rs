//! symdeploy entry point.
//!
//! Usage: `symdeploy <artifact-root>`. The root directory must contain
//! the compiled bundles, bytecode files and sourcemaps at any depth,
//! plus the `eas-update-metadata.json` manifest.

mod pipeline;

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Some(root) = std::env::args().nth(1) else {
        eprintln!("usage: symdeploy <artifact-root>");
        return ExitCode::FAILURE;
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        root = %root,
        "starting symdeploy"
    );

    match pipeline::run(Path::new(&root)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "upload pipeline failed");
            ExitCode::FAILURE
        }
    }
}
