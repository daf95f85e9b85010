//! Trait for tag-based release lookups

#[cfg(test)]
use mockall::automock;
use serde::Deserialize;

use crate::release::error::ReleaseLookupError;
use crate::repository::RepositoryIdentity;

/// Release metadata returned by a tag lookup
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Free-text release notes; may be absent or blank
    pub body: Option<String>,
}

/// Trait for querying a release by its tag name
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Looks up the release tagged `tag` in `repository`
    ///
    /// # Returns
    /// * `Ok(Some(Release))` - A release exists under this tag
    /// * `Ok(None)` - No release under this tag (candidate miss)
    /// * `Err(ReleaseLookupError)` - Any other failure; never skipped silently
    async fn release_by_tag(
        &self,
        repository: &RepositoryIdentity,
        tag: &str,
    ) -> Result<Option<Release>, ReleaseLookupError>;
}
