//! Common test utilities for integration tests.
//!
//! Each `TestContext` owns a temporary directory holding both the settings
//! file and the notes directory, so tests never touch the user's config.

pub mod fixtures;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use flashcard_notes_lib::settings::SettingsStore;
use flashcard_notes_lib::AppState;

pub struct TestContext {
    pub state: AppState,
    dir: TempDir,
}

impl TestContext {
    /// Context with no notes directory configured.
    pub async fn unconfigured() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = SettingsStore::load(dir.path().join("settings.json"))
            .await
            .expect("Failed to load settings");
        Self {
            state: AppState::new(store),
            dir,
        }
    }

    /// Context whose notes directory holds `files`.
    pub async fn with_notes(files: &[(&str, &str)]) -> Self {
        let ctx = Self::unconfigured().await;
        let notes = ctx.notes_dir();
        tokio::fs::create_dir(&notes).await.expect("Failed to create notes dir");
        for (name, content) in files {
            tokio::fs::write(notes.join(name), content)
                .await
                .expect("Failed to write note");
        }
        ctx.state
            .settings
            .lock()
            .await
            .set_notes_directory(&notes)
            .await
            .expect("Failed to set notes directory");
        ctx
    }

    pub fn notes_dir(&self) -> PathBuf {
        self.dir.path().join("notes")
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Filenames currently in the notes directory.
    pub async fn note_files(&self) -> Vec<String> {
        let mut entries = tokio::fs::read_dir(self.notes_dir()).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        names.sort();
        names
    }
}
