//! Flashcard lookup and answer comparison commands.

use crate::error::{CollectError, ReportError};
use crate::notes::collect_flashcards;
use crate::settings::SettingsError;
use crate::state::AppState;
use flashcard_core::{clean_markdown, Flashcard, Highlighter, SessionError};
use serde::{Deserialize, Serialize};

/// What went wrong, so callers can tell the outcomes apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NoDirectoryConfigured,
    NoFlashcardsFound,
    NoActiveSession,
    Io,
    Session,
    Settings,
}

#[derive(Debug, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct CommandError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CommandError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<SettingsError> for CommandError {
    fn from(e: SettingsError) -> Self {
        let kind = match e {
            SettingsError::NoDirectoryConfigured => ErrorKind::NoDirectoryConfigured,
            SettingsError::Io { .. } | SettingsError::Json(_) => ErrorKind::Settings,
        };
        Self::new(kind, e.to_string())
    }
}

impl From<CollectError> for CommandError {
    fn from(e: CollectError) -> Self {
        Self::new(ErrorKind::Io, e.to_string())
    }
}

impl From<ReportError> for CommandError {
    fn from(e: ReportError) -> Self {
        Self::new(ErrorKind::Io, e.to_string())
    }
}

impl From<SessionError> for CommandError {
    fn from(e: SessionError) -> Self {
        Self::new(ErrorKind::Session, e.to_string())
    }
}

/// Typed and expected answers with keywords marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedAnswer {
    pub user_answer: String,
    pub expected_answer: String,
}

/// Get flashcards from notes matching a pattern.
pub async fn get_flashcards(
    pattern: String,
    state: &AppState,
) -> Result<Vec<Flashcard>, CommandError> {
    let notes_dir = state.notes_dir().await?;
    collect_flashcards(&notes_dir, &pattern)
        .await
        .map_err(Into::into)
}

/// Mark a card's keywords in the typed answer and in the expected answer.
pub fn highlight_answer(
    user_answer: &str,
    card: &Flashcard,
    highlighter: &Highlighter,
) -> HighlightedAnswer {
    HighlightedAnswer {
        user_answer: highlighter.highlight(user_answer, &card.keywords),
        expected_answer: highlighter.highlight(&clean_markdown(&card.expected_answer), &card.keywords),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_directory_is_its_own_kind() {
        let err: CommandError = SettingsError::NoDirectoryConfigured.into();
        assert_eq!(err.kind, ErrorKind::NoDirectoryConfigured);
        assert_eq!(err.message, "no notes directory configured");
    }

    #[test]
    fn io_failures_are_io_kind() {
        let err: CommandError = CollectError::DirectoryRead {
            path: "/missing".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .into();
        assert_eq!(err.kind, ErrorKind::Io);
        assert!(err.message.contains("/missing"));
    }

    #[test]
    fn error_kind_serializes_snake_case() {
        let err = CommandError::new(ErrorKind::NoFlashcardsFound, "none");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "no_flashcards_found");
        assert_eq!(json["message"], "none");
    }

    #[test]
    fn highlights_both_answers() {
        let card = Flashcard {
            id: "bio.md-0".to_string(),
            question: "Powerhouse?".to_string(),
            expected_answer: "The **mitochondria** makes ATP".to_string(),
            source: "bio.md".to_string(),
            keywords: vec!["mitochondria".to_string()],
        };

        let highlighted = highlight_answer("mitochondria!", &card, &Highlighter::default());
        assert_eq!(highlighted.user_answer, "<mark>mitochondria</mark>!");
        assert_eq!(
            highlighted.expected_answer,
            "The <mark>mitochondria</mark> makes ATP"
        );
    }
}
