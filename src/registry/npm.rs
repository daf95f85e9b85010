//! npm website client extracting the latest version from the package page

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::config::ConfigError;
use crate::registry::error::{FetchError, ParseError};
use crate::registry::source::VersionSource;

/// Default base URL for the npm website
const DEFAULT_BASE_URL: &str = "https://www.npmjs.com";

/// User agent sent with page requests
const USER_AGENT: &str = "version-poll";

/// Client for the npm package page listing current tags
pub struct NpmSite {
    client: reqwest::Client,
    base_url: String,
    version_table: Selector,
    version_link: Selector,
}

impl NpmSite {
    /// Creates a new NpmSite with a custom base URL and version-table selector
    pub fn new(base_url: &str, version_table_selector: &str) -> Result<Self, ConfigError> {
        let version_table =
            Selector::parse(version_table_selector).map_err(|e| ConfigError::InvalidSelector {
                selector: version_table_selector.to_string(),
                reason: e.to_string(),
            })?;
        let version_link = Selector::parse("a").expect("static selector is valid");

        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            version_table,
            version_link,
        })
    }

    /// Extracts the latest version from page markup: the text of the first
    /// link inside the current-tags table, trimmed of surrounding whitespace.
    ///
    /// Kept separate from the transport so the brittle selector logic can be
    /// reconfigured or swapped without touching the fetch path.
    pub fn extract_latest_version(&self, markup: &str) -> Result<String, ParseError> {
        let document = Html::parse_document(markup);

        let table = document
            .select(&self.version_table)
            .next()
            .ok_or(ParseError::VersionTableNotFound)?;

        let link = table
            .select(&self.version_link)
            .next()
            .ok_or(ParseError::VersionLinkNotFound)?;

        Ok(link.text().collect::<String>().trim().to_string())
    }
}

impl Default for NpmSite {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, crate::config::VERSION_TABLE_SELECTOR)
            .expect("default selector is valid")
    }
}

#[async_trait::async_trait]
impl VersionSource for NpmSite {
    async fn fetch_latest_version(&self, package: &str) -> Result<String, FetchError> {
        let url = format!("{}/package/{}?activeTab=versions", self.base_url, package);
        debug!("Fetching registry page: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Registry page returned status {}: {}", status, url);
            return Err(FetchError::Status(status));
        }

        let markup = response.text().await?;
        let version = self.extract_latest_version(&markup)?;

        Ok(version)
    }
}
