//! Build artifact discovery and grouping.
//!
//! A build output directory contains JavaScript bundle scripts, Hermes
//! bytecode files and their sourcemaps at arbitrary depth. This crate
//! classifies the relevant files, collects them from a directory tree,
//! and partitions them into logical groups where a group is one
//! script/bytecode file plus its sourcemap.

mod classify;
mod error;
mod group;
mod walk;

pub use classify::{
    ArtifactKind, BUNDLE_EXTS, BYTECODE_EXT, SOURCEMAP_EXT, classify, is_sourcemap,
};
pub use error::AssetError;
pub use group::{ArtifactGroups, contains_bytecode, group_artifacts};
pub use walk::collect_artifacts;
