//! Saving and listing session reports.

use super::markdown_filenames;
use crate::error::ReportError;
use flashcard_core::{is_report_filename, render_report, report_filename, FlashcardSession};
use std::path::Path;
use tokio::fs;

/// Write the session's report into `notes_dir` and return its filename.
///
/// Saving the same session again overwrites the earlier file.
pub async fn save_report(
    notes_dir: &Path,
    session: &FlashcardSession,
) -> Result<String, ReportError> {
    let filename = report_filename(session);
    let path = notes_dir.join(&filename);

    fs::write(&path, render_report(session))
        .await
        .map_err(|source| ReportError::Write { path, source })?;

    tracing::info!(
        "Saved session {} ({}/{} answered) to {}",
        session.id,
        session.results.len(),
        session.cards.len(),
        filename
    );
    Ok(filename)
}

/// Report filenames in `notes_dir`, in directory order.
///
/// An unreadable directory yields an empty list.
pub async fn list_reports(notes_dir: &Path) -> Vec<String> {
    match markdown_filenames(notes_dir).await {
        Ok(names) => names
            .into_iter()
            .filter(|name| is_report_filename(name))
            .collect(),
        Err(e) => {
            tracing::warn!(
                "Error reading flashcard sessions in {}: {}",
                notes_dir.display(),
                e
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashcard_core::{parse, report_date};
    use tempfile::TempDir;

    fn completed_session() -> FlashcardSession {
        let cards = parse("## Q\nThe **answer**", "bio.md").cards;
        let mut session = FlashcardSession::new("bio.*", cards);
        session.answer_current("answer").unwrap();
        session
    }

    #[tokio::test]
    async fn saved_report_is_listed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bio.md"), "## Q\nA").await.unwrap();
        let session = completed_session();

        let filename = save_report(dir.path(), &session).await.unwrap();

        assert_eq!(list_reports(dir.path()).await, vec![filename.clone()]);
        assert_eq!(report_date(&filename), Some(session.created_at.date_naive()));
        assert!(filename.contains(&session.created_at.format("%Y-%m-%d").to_string()));

        let content = fs::read_to_string(dir.path().join(&filename)).await.unwrap();
        assert_eq!(content, render_report(&session));
    }

    #[tokio::test]
    async fn saving_twice_overwrites() {
        let dir = TempDir::new().unwrap();
        let mut session = completed_session();

        let first = save_report(dir.path(), &session).await.unwrap();
        session.pattern = "changed".to_string();
        let second = save_report(dir.path(), &session).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(list_reports(dir.path()).await.len(), 1);
        let content = fs::read_to_string(dir.path().join(&second)).await.unwrap();
        assert!(content.contains("**Pattern:** changed"));
    }

    #[tokio::test]
    async fn missing_directory_fails_on_save() {
        let dir = TempDir::new().unwrap();
        let err = save_report(&dir.path().join("gone"), &completed_session())
            .await
            .unwrap_err();
        assert!(matches!(err, ReportError::Write { .. }));
    }

    #[tokio::test]
    async fn missing_directory_lists_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(list_reports(&dir.path().join("gone")).await.is_empty());
    }
}
