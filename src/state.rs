//! Durable record of the last observed version

use std::fs;
use std::io;
use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("State file error: {0}")]
    Io(#[from] io::Error),
}

/// Trait for reading and replacing the persisted last-seen version
#[cfg_attr(test, automock)]
pub trait VersionStore: Send + Sync {
    /// Returns the previously persisted version, or `None` on the first run
    fn read_last_version(&self) -> Result<Option<String>, StateError>;

    /// Replaces the persisted version wholesale
    fn save_last_version(&self, version: &str) -> Result<(), StateError>;
}

/// Plain-text file holding exactly the trimmed version string
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VersionStore for VersionFile {
    fn read_last_version(&self) -> Result<Option<String>, StateError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save_last_version(&self, version: &str) -> Result<(), StateError> {
        fs::write(&self.path, version)?;
        Ok(())
    }
}
