//! Version-change detection workflow
//!
//! One run walks a fixed sequence: fetch the latest published version, read
//! the persisted version, compare, optionally resolve release notes, persist.
//! State is only touched after a successful fetch.

use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::registry::error::FetchError;
use crate::registry::source::VersionSource;
use crate::release::notes::resolve_release_notes;
use crate::release::source::ReleaseSource;
use crate::repository::RepositoryIdentity;
use crate::state::{StateError, VersionStore};

/// Result of one polling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// No prior state existed; the fetched version was persisted
    FirstRun { latest: String },
    /// The fetched version matches the persisted one
    Unchanged { latest: String },
    /// The fetched version differs from the persisted one
    Updated {
        previous: String,
        latest: String,
        /// Release notes, a placeholder, or a degraded lookup message
        notes: String,
    },
}

impl CheckOutcome {
    /// Console lines describing this outcome, in print order.
    pub fn console_lines(&self) -> Vec<String> {
        match self {
            CheckOutcome::FirstRun { latest } => vec![
                format!("Latest version found: {latest}"),
                format!("Initial version saved: {latest}"),
            ],
            CheckOutcome::Unchanged { latest } => vec![
                format!("Latest version found: {latest}"),
                format!(
                    "No updates. Latest version ({latest}) is the same as the last checked version."
                ),
            ],
            CheckOutcome::Updated {
                previous,
                latest,
                notes,
            } => vec![
                format!("Latest version found: {latest}"),
                format!("New version detected! Latest: {latest}, Previous: {previous}"),
                notes.clone(),
            ],
        }
    }
}

/// Fatal failure ending a run before completion
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    State(#[from] StateError),
}

/// Runs one fetch-compare-persist cycle.
///
/// A release-note lookup failure degrades to a substitute message instead of
/// failing the run: recording that an update happened takes priority over
/// narrating what changed.
pub async fn run_check<V, R, S>(
    source: &V,
    releases: &R,
    store: &S,
    config: &Config,
    repository: &RepositoryIdentity,
) -> Result<CheckOutcome, CheckError>
where
    V: VersionSource + ?Sized,
    R: ReleaseSource + ?Sized,
    S: VersionStore + ?Sized,
{
    let latest = source.fetch_latest_version(&config.package).await?;
    info!("Latest published version of {}: {}", config.package, latest);

    match store.read_last_version()? {
        None => {
            store.save_last_version(&latest)?;
            Ok(CheckOutcome::FirstRun { latest })
        }
        Some(previous) if previous == latest => Ok(CheckOutcome::Unchanged { latest }),
        Some(previous) => {
            info!("Version changed from {} to {}", previous, latest);

            let notes =
                match resolve_release_notes(releases, repository, &latest, &config.tag_styles)
                    .await
                {
                    Ok(notes) => notes,
                    Err(e) => {
                        warn!("Release-note lookup failed: {}", e);
                        format!("Could not fetch release notes: {e}")
                    }
                };

            store.save_last_version(&latest)?;

            Ok(CheckOutcome::Updated {
                previous,
                latest,
                notes,
            })
        }
    }
}
