//! Tag-candidate fallback chain for locating release notes

use tracing::{debug, warn};

use crate::release::error::ReleaseLookupError;
use crate::release::source::ReleaseSource;
use crate::repository::RepositoryIdentity;

/// Placeholder returned when a release exists but carries no notes text
const EMPTY_NOTES_PLACEHOLDER: &str = "(release has no notes)";

/// One spelling policy mapping a version to a tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    /// `v`-prefixed tag (`v4.19.3`)
    VPrefixed,
    /// Bare version tag (`4.19.3`)
    Bare,
}

impl TagStyle {
    /// Renders `version` as a tag name under this style
    pub fn tag_for(&self, version: &str) -> String {
        match self {
            TagStyle::VPrefixed => format!("v{version}"),
            TagStyle::Bare => version.to_string(),
        }
    }
}

/// Tag names to try for `version`, in the configured order
pub fn tag_candidates(version: &str, styles: &[TagStyle]) -> Vec<String> {
    styles.iter().map(|style| style.tag_for(version)).collect()
}

/// Finds the release notes for `version`, trying each tag candidate in order.
///
/// A missing release moves on to the next candidate; any other lookup failure
/// is propagated. When every candidate misses, returns a fixed message
/// pointing at the repository's releases listing.
pub async fn resolve_release_notes<R>(
    source: &R,
    repository: &RepositoryIdentity,
    version: &str,
    styles: &[TagStyle],
) -> Result<String, ReleaseLookupError>
where
    R: ReleaseSource + ?Sized,
{
    for tag in tag_candidates(version, styles) {
        debug!("Looking up release for tag {:?}", tag);

        match source.release_by_tag(repository, &tag).await? {
            Some(release) => {
                let notes = match release.body {
                    Some(body) if !body.trim().is_empty() => body,
                    _ => EMPTY_NOTES_PLACEHOLDER.to_string(),
                };
                return Ok(notes);
            }
            None => debug!("No release tagged {:?}", tag),
        }
    }

    warn!(
        "No release found for version {} under any tag candidate",
        version
    );
    Ok(format!(
        "No release notes found for {version}. See {} for the release history.",
        repository.releases_url()
    ))
}
