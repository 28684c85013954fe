//! Practice history commands.

use crate::notes::list_reports;
use crate::state::AppState;
use chrono::Utc;
use flashcard_core::{activity, DayActivity};

use super::flashcards::CommandError;

const DEFAULT_ACTIVITY_DAYS: usize = 365;

/// Report filenames of past sessions.
pub async fn list_sessions(state: &AppState) -> Result<Vec<String>, CommandError> {
    let notes_dir = state.notes_dir().await?;
    Ok(list_reports(&notes_dir).await)
}

/// Sessions per day for the heatmap, oldest first.
pub async fn get_activity(
    days: Option<usize>,
    state: &AppState,
) -> Result<Vec<DayActivity>, CommandError> {
    let sessions = list_sessions(state).await?;
    let days = days.unwrap_or(DEFAULT_ACTIVITY_DAYS);
    Ok(activity(&sessions, Utc::now().date_naive(), days))
}
