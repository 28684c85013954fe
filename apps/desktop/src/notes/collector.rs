//! Gathers flashcards from every note matching a pattern.

use super::markdown_filenames;
use crate::error::CollectError;
use flashcard_core::{parser, Flashcard, Pattern};
use std::path::Path;
use tokio::fs;

/// Parse every note in `notes_dir` whose name matches `pattern`.
///
/// Cards are returned file by file in directory listing order, each file's
/// cards in document order. A note that cannot be read aborts the whole
/// collection. No matching note is not an error: the list is just empty.
pub async fn collect_flashcards(
    notes_dir: &Path,
    pattern: &str,
) -> Result<Vec<Flashcard>, CollectError> {
    let pattern = Pattern::new(pattern);

    let filenames = markdown_filenames(notes_dir)
        .await
        .map_err(|source| CollectError::DirectoryRead {
            path: notes_dir.to_path_buf(),
            source,
        })?;

    let mut cards = Vec::new();
    let mut files = 0;

    for filename in filenames.iter().filter(|name| pattern.matches(name)) {
        let path = notes_dir.join(filename);
        let content = fs::read_to_string(&path)
            .await
            .map_err(|source| CollectError::FileRead { path, source })?;

        let parsed = parser::parse(&content, filename);
        tracing::debug!("Parsed {} cards from {}", parsed.total_questions, filename);
        cards.extend(parsed.cards);
        files += 1;
    }

    tracing::info!(
        "Collected {} flashcards from {} notes matching '{}'",
        cards.len(),
        files,
        pattern
    );
    Ok(cards)
}
