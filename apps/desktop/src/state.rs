//! Application state.

use crate::settings::{SettingsError, SettingsStore};
use flashcard_core::FlashcardSession;
use std::path::PathBuf;
use tokio::sync::Mutex as AsyncMutex;

/// Global application state.
pub struct AppState {
    pub settings: AsyncMutex<SettingsStore>,
    /// The practice run in progress, if any.
    pub session: AsyncMutex<Option<FlashcardSession>>,
}

impl AppState {
    pub fn new(settings: SettingsStore) -> Self {
        Self {
            settings: AsyncMutex::new(settings),
            session: AsyncMutex::new(None),
        }
    }

    /// The configured notes directory.
    pub async fn notes_dir(&self) -> Result<PathBuf, SettingsError> {
        self.settings.lock().await.notes_dir()
    }
}
