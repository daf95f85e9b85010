use thiserror::Error;

/// Failure while retrieving the latest version from the registry page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Registry page request failed with status {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Expected markup structure missing from the registry page
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Current-tags table not found in the registry page")]
    VersionTableNotFound,

    #[error("No version link found inside the current-tags table")]
    VersionLinkNotFound,
}
