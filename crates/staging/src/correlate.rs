//! Correlation of update records with artifact groups.
//!
//! For each update record, finds the artifact group whose key contains
//! the record's platform, derives a new collision-free group name from
//! the platform and update id, and stages the group under that name.
//! Group keys live in a sorted map, so correlation is a deterministic
//! function of its inputs.

use std::collections::BTreeMap;
use std::path::Path;

use symdeploy_assets::ArtifactGroups;
use symdeploy_manifest::UpdateRecord;
use tracing::{info, warn};

use crate::error::StagingError;
use crate::scratch::ScratchArea;
use crate::stage::stage_group;

/// Runtime version label per staged group name.
///
/// Produced by [`correlate`] and consumed by the upload driver, which
/// uses the label as the release identifier.
pub type RuntimeMap = BTreeMap<String, String>;

/// Matches each update record against the source groups and stages the
/// matched files.
///
/// A record whose platform matches no group key is skipped with a
/// warning; the run continues with the remaining records. If several
/// keys contain the platform, the lexicographically first one wins,
/// with a warning naming the candidates. A copy failure aborts.
pub fn correlate(
    groups: &ArtifactGroups,
    updates: &[UpdateRecord],
    scratch: &ScratchArea,
) -> Result<RuntimeMap, StagingError> {
    let mut runtimes = RuntimeMap::new();

    for record in updates {
        let candidates: Vec<&str> = groups
            .keys()
            .filter(|key| key.contains(&record.platform))
            .map(String::as_str)
            .collect();

        let Some(&matched_key) = candidates.first() else {
            warn!(
                platform = %record.platform,
                update = %record.id,
                "no artifact group matches platform, skipping update"
            );
            continue;
        };
        if candidates.len() > 1 {
            warn!(
                platform = %record.platform,
                update = %record.id,
                candidates = ?candidates,
                "multiple artifact groups match platform, using the first"
            );
        }

        let new_name = staged_group_name(&record.platform, &record.id, matched_key);
        stage_group(scratch, &groups[matched_key], &new_name)?;
        info!(
            group = %matched_key,
            staged_as = %new_name,
            runtime = %record.runtime_version,
            "staged artifact group"
        );
        runtimes.insert(new_name, record.runtime_version.clone());
    }

    Ok(runtimes)
}

/// Derives the staged group name for a matched key.
///
/// The name embeds the platform and update id so two records are never
/// staged under the same name, and keeps the matched key's extension
/// (empty if it had none) so the second grouping pass classifies the
/// staged file the same way as the original.
pub fn staged_group_name(platform: &str, id: &str, matched_key: &str) -> String {
    let ext = Path::new(matched_key)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    format!("{platform}-update-id-{id}{ext}")
}
