//! Filesystem error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while gathering flashcards from a notes directory.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("cannot read notes directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read note {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure while writing a session report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write report {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
