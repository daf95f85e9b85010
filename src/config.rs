use std::path::PathBuf;

use thiserror::Error;

use crate::release::notes::TagStyle;
use crate::repository::RepositoryIdentity;

/// Base URL of the npm website hosting the package pages
pub const DEFAULT_REGISTRY_URL: &str = "https://www.npmjs.com";

/// Package whose published versions are watched
pub const WATCHED_PACKAGE: &str = "express";

/// CSS selector locating the "Current Tags" table on the package page
pub const VERSION_TABLE_SELECTOR: &str = "table.cab9c622";

/// Source repository of the watched package
pub const PACKAGE_REPOSITORY_URL: &str = "https://github.com/expressjs/express";

/// Base URL of the GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// File holding the version observed on the most recent successful run
pub const STATE_FILE: &str = "last_version.txt";

/// Tag spellings tried when looking up a release, in order
pub const DEFAULT_TAG_STYLES: &[TagStyle] = &[TagStyle::VPrefixed, TagStyle::Bare];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid repository URL {url:?}: {reason}")]
    InvalidRepositoryUrl { url: String, reason: &'static str },

    #[error("Invalid version table selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// Runtime configuration, assembled once at startup and threaded into each
/// component so tests can substitute every external location.
#[derive(Debug, Clone)]
pub struct Config {
    pub registry_url: String,
    pub package: String,
    pub version_table_selector: String,
    pub repository_url: String,
    pub api_url: String,
    pub state_path: PathBuf,
    pub tag_styles: Vec<TagStyle>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            package: WATCHED_PACKAGE.to_string(),
            version_table_selector: VERSION_TABLE_SELECTOR.to_string(),
            repository_url: PACKAGE_REPOSITORY_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            state_path: PathBuf::from(STATE_FILE),
            tag_styles: DEFAULT_TAG_STYLES.to_vec(),
        }
    }
}

impl Config {
    /// Resolves the owner/name pair from the configured repository URL.
    pub fn repository(&self) -> Result<RepositoryIdentity, ConfigError> {
        RepositoryIdentity::from_url(&self.repository_url)
    }
}
