//! Note listing commands.

use crate::notes::{list_notes, NoteEntry};
use crate::state::AppState;

use super::flashcards::CommandError;

/// List the notes in the configured directory.
pub async fn get_notes(state: &AppState) -> Result<Vec<NoteEntry>, CommandError> {
    let notes_dir = state.notes_dir().await?;
    Ok(list_notes(&notes_dir).await)
}
