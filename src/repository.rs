//! Source repository identity for the watched package

use std::fmt;

use crate::config::ConfigError;

/// Host the configured repository URL must point at
const EXPECTED_HOST: &str = "github.com";

/// Owner/name pair identifying a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    pub owner: String,
    pub name: String,
}

impl RepositoryIdentity {
    /// Splits a repository URL into its owner and name, validating the host.
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &'static str| ConfigError::InvalidRepositoryUrl {
            url: url.to_string(),
            reason,
        };

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| invalid("missing http(s) scheme"))?;

        let mut segments = rest.split('/').filter(|segment| !segment.is_empty());

        let host = segments.next().ok_or_else(|| invalid("missing host"))?;
        if host != EXPECTED_HOST {
            return Err(invalid("host is not github.com"));
        }

        let owner = segments
            .next()
            .ok_or_else(|| invalid("missing owner segment"))?;
        let name = segments
            .next()
            .map(|segment| segment.trim_end_matches(".git"))
            .filter(|name| !name.is_empty())
            .ok_or_else(|| invalid("missing repository name segment"))?;

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Human-facing releases listing, referenced when no tagged release is found.
    pub fn releases_url(&self) -> String {
        format!(
            "https://{}/{}/{}/releases",
            EXPECTED_HOST, self.owner, self.name
        )
    }
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
