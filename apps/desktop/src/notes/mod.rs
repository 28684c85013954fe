//! Notes directory access.
//!
//! Notes are flat Markdown files whose names encode a hierarchy with dots,
//! e.g. `mathematics.calculus.md`.

pub mod collector;
pub mod reports;

use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;

pub use collector::collect_flashcards;
pub use reports::{list_reports, save_report};

pub(crate) const MARKDOWN_EXT: &str = ".md";

/// A note file and its position in the dotted hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteEntry {
    pub filename: String,
    pub hierarchy: Vec<String>,
    /// Hierarchy joined for display, `mathematics > calculus`.
    pub path: String,
    pub full_path: PathBuf,
}

impl NoteEntry {
    pub fn new(notes_dir: &Path, filename: &str) -> Self {
        let hierarchy: Vec<String> = filename
            .strip_suffix(MARKDOWN_EXT)
            .unwrap_or(filename)
            .split('.')
            .map(str::to_string)
            .collect();

        Self {
            filename: filename.to_string(),
            path: hierarchy.join(" > "),
            hierarchy,
            full_path: notes_dir.join(filename),
        }
    }
}

/// List the Markdown notes in a directory, in directory order.
///
/// An unreadable directory yields an empty list.
pub async fn list_notes(notes_dir: &Path) -> Vec<NoteEntry> {
    match markdown_filenames(notes_dir).await {
        Ok(names) => names
            .iter()
            .map(|name| NoteEntry::new(notes_dir, name))
            .collect(),
        Err(e) => {
            tracing::warn!("Error reading notes in {}: {}", notes_dir.display(), e);
            Vec::new()
        }
    }
}

/// Names of the `.md` entries of a directory, in listing order.
pub(crate) async fn markdown_filenames(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        // Non UTF-8 names cannot be note names.
        if let Ok(name) = entry.file_name().into_string() {
            if name.ends_with(MARKDOWN_EXT) {
                names.push(name);
            }
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hierarchy_from_filename() {
        let entry = NoteEntry::new(Path::new("/notes"), "mathematics.calculus.limits.md");
        assert_eq!(entry.hierarchy, vec!["mathematics", "calculus", "limits"]);
        assert_eq!(entry.path, "mathematics > calculus > limits");
        assert_eq!(entry.full_path, PathBuf::from("/notes/mathematics.calculus.limits.md"));
    }

    #[tokio::test]
    async fn lists_only_markdown() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("bio.cells.md"), "# Cells").await.unwrap();
        fs::write(dir.path().join("todo.txt"), "nope").await.unwrap();

        let notes = list_notes(dir.path()).await;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].filename, "bio.cells.md");
        assert_eq!(notes[0].hierarchy, vec!["bio", "cells"]);
    }

    #[tokio::test]
    async fn missing_directory_lists_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(list_notes(&dir.path().join("missing")).await.is_empty());
    }
}
