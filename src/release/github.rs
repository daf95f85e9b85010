//! GitHub Releases API client

use tracing::warn;

use crate::release::error::ReleaseLookupError;
use crate::release::source::{Release, ReleaseSource};
use crate::repository::RepositoryIdentity;

/// Default base URL for the GitHub API
const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Versioned media type requested from the releases endpoint
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// User agent sent with API requests (GitHub rejects anonymous clients)
const USER_AGENT: &str = "version-poll";

/// Client for the release-by-tag lookup endpoint
pub struct GitHubReleases {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubReleases {
    /// Creates a new GitHubReleases client with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for GitHubReleases {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubReleases {
    async fn release_by_tag(
        &self,
        repository: &RepositoryIdentity,
        tag: &str,
    ) -> Result<Option<Release>, ReleaseLookupError> {
        let url = format!(
            "{}/repos/{}/{}/releases/tags/{}",
            self.base_url, repository.owner, repository.name, tag
        );

        let response = self
            .client
            .get(&url)
            .header("Accept", GITHUB_MEDIA_TYPE)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(ReleaseLookupError::UnexpectedStatus {
                tag: tag.to_string(),
                status,
            });
        }

        let release: Release = response.json().await.map_err(|e| {
            warn!("Failed to parse release response: {}", e);
            ReleaseLookupError::InvalidResponse(e.to_string())
        })?;

        Ok(Some(release))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn express() -> RepositoryIdentity {
        RepositoryIdentity {
            owner: "expressjs".to_string(),
            name: "express".to_string(),
        }
    }

    #[tokio::test]
    async fn release_by_tag_returns_the_release_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/expressjs/express/releases/tags/v4.19.3")
            .match_header("accept", GITHUB_MEDIA_TYPE)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"tag_name": "v4.19.3", "body": "- fix X"}"#)
            .create_async()
            .await;

        let releases = GitHubReleases::new(&server.url());
        let release = releases
            .release_by_tag(&express(), "v4.19.3")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(release.unwrap().body.as_deref(), Some("- fix X"));
    }

    #[tokio::test]
    async fn release_by_tag_returns_none_for_an_unknown_tag() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/expressjs/express/releases/tags/4.19.3")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let releases = GitHubReleases::new(&server.url());
        let release = releases.release_by_tag(&express(), "4.19.3").await.unwrap();

        mock.assert_async().await;
        assert!(release.is_none());
    }

    #[tokio::test]
    async fn release_by_tag_treats_other_statuses_as_hard_failures() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/expressjs/express/releases/tags/v4.19.3")
            .with_status(403)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "API rate limit exceeded"}"#)
            .create_async()
            .await;

        let releases = GitHubReleases::new(&server.url());
        let result = releases.release_by_tag(&express(), "v4.19.3").await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(ReleaseLookupError::UnexpectedStatus { status, .. })
                if status == reqwest::StatusCode::FORBIDDEN
        ));
    }

    #[tokio::test]
    async fn release_by_tag_rejects_a_malformed_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/expressjs/express/releases/tags/v4.19.3")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create_async()
            .await;

        let releases = GitHubReleases::new(&server.url());
        let result = releases.release_by_tag(&express(), "v4.19.3").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ReleaseLookupError::InvalidResponse(_))));
    }
}
