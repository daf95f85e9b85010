use thiserror::Error;

/// Failure while looking up a tagged release
///
/// A missing release is not an error; lookups report it as an empty result
/// and the caller moves on to the next tag candidate.
#[derive(Debug, Error)]
pub enum ReleaseLookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Release lookup for tag {tag:?} failed with status {status}")]
    UnexpectedStatus {
        tag: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
