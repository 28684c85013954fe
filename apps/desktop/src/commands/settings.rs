//! Settings commands.

use crate::settings::{Settings, SettingsPatch};
use crate::state::AppState;
use std::path::PathBuf;

use super::flashcards::{CommandError, ErrorKind};

/// Get the current settings.
pub async fn get_settings(state: &AppState) -> Settings {
    state.settings.lock().await.settings().clone()
}

/// Apply a partial update.
pub async fn update_settings(
    patch: SettingsPatch,
    state: &AppState,
) -> Result<Settings, CommandError> {
    let mut store = state.settings.lock().await;
    Ok(store.update(patch).await?.clone())
}

/// Restore default settings.
pub async fn reset_settings(state: &AppState) -> Result<Settings, CommandError> {
    let mut store = state.settings.lock().await;
    Ok(store.reset().await?.clone())
}

/// Select the notes directory.
pub async fn set_notes_directory(
    dir_path: String,
    state: &AppState,
) -> Result<Settings, CommandError> {
    let path = PathBuf::from(&dir_path);

    if !path.is_dir() {
        return Err(CommandError::new(
            ErrorKind::Io,
            format!("Path is not a directory: {}", dir_path),
        ));
    }

    let mut store = state.settings.lock().await;
    Ok(store.set_notes_directory(path).await?.clone())
}
