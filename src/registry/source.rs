//! Trait for fetching the current published version of a package

#[cfg(test)]
use mockall::automock;

use crate::registry::error::FetchError;

/// Trait for retrieving the latest published version from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Fetches the latest published version string for `package`
    ///
    /// # Returns
    /// * `Ok(String)` - The trimmed version token (e.g., "4.19.2")
    /// * `Err(FetchError)` - Transport failure, non-success status, or
    ///   missing markup structure
    async fn fetch_latest_version(&self, package: &str) -> Result<String, FetchError>;
}
