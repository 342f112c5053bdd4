use std::path::PathBuf;

use crate::author::AuthorRegistry;
use crate::error::MastheadError;

/// Environment variable naming an author data file to use instead of the bundled one.
pub const AUTHORS_ENV: &str = "MASTHEAD_AUTHORS";

/// Where author data comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthorSource {
    /// `data/authors.json`, compiled in.
    #[default]
    Bundled,
    /// A data file on disk, read at startup.
    File(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub authors: AuthorSource,
}

impl Config {
    /// Load config from environment variables.
    ///
    /// - `MASTHEAD_AUTHORS`: path to an author data file (optional)
    pub fn from_env() -> Self {
        Self::from_authors_path(std::env::var_os(AUTHORS_ENV).map(PathBuf::from))
    }

    /// Use the given data file, or the bundled authors when `None`.
    pub fn from_authors_path(path: Option<PathBuf>) -> Self {
        let authors = match path {
            Some(path) if !path.as_os_str().is_empty() => AuthorSource::File(path),
            _ => AuthorSource::Bundled,
        };
        Self { authors }
    }

    /// Build the registry this config points at.
    ///
    /// Call once at startup and share the result.
    pub fn registry(&self) -> Result<AuthorRegistry, MastheadError> {
        match &self.authors {
            AuthorSource::Bundled => Ok(AuthorRegistry::bundled()),
            AuthorSource::File(path) => AuthorRegistry::load(path),
        }
    }
}
