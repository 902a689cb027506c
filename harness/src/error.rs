//! Harness error type.

use std::path::PathBuf;

use setcover_kernel::parse::ParseError;
use setcover_search::error::SearchError;

/// Error during a harness run or while writing its artifacts.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The instance file is malformed or unreadable.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Policy or parameter validation failed before the run started.
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialise run summary: {0}")]
    Summary(#[from] serde_json::Error),
    #[error("portfolio needs at least one run configuration")]
    EmptyPortfolio,
}

impl RunError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
