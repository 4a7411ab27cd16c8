//! Artifact staging by deployment update.
//!
//! Correlates each update record from the manifest with the artifact
//! group built from the source directory, then copies the group's files
//! into a scratch directory under a new, collision-free name embedding
//! the platform and update id. The staged directory is what the upload
//! driver walks and groups a second time.

mod correlate;
mod error;
mod scratch;
mod stage;

pub use correlate::{RuntimeMap, correlate, staged_group_name};
pub use error::StagingError;
pub use scratch::{SCRATCH_DIR_NAME, ScratchArea};
pub use stage::stage_group;
