//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur while driving a practice session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session already completed all {total} cards")]
    AlreadyCompleted { total: usize },
}
