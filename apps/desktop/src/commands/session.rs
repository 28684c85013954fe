//! Practice session commands.

use crate::notes::{collect_flashcards, save_report};
use crate::state::AppState;
use flashcard_core::{Flashcard, FlashcardResult, FlashcardSession, Highlighter};
use serde::Serialize;

use super::flashcards::{highlight_answer, CommandError, ErrorKind, HighlightedAnswer};

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub result: FlashcardResult,
    pub highlighted: HighlightedAnswer,
    pub remaining: usize,
    /// Set once the last card is answered and the report is written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_filename: Option<String>,
}

fn no_active_session() -> CommandError {
    CommandError::new(ErrorKind::NoActiveSession, "no flashcard session in progress")
}

/// Start a session over the cards matching `pattern`.
///
/// Replaces any session already in progress without saving it.
pub async fn start_session(
    pattern: String,
    state: &AppState,
) -> Result<FlashcardSession, CommandError> {
    let notes_dir = state.notes_dir().await?;
    let cards = collect_flashcards(&notes_dir, &pattern).await?;

    if cards.is_empty() {
        return Err(CommandError::new(
            ErrorKind::NoFlashcardsFound,
            format!("no flashcards found matching pattern '{}'", pattern),
        ));
    }

    let session = FlashcardSession::new(pattern, cards);
    tracing::info!(
        "Started session {} with {} cards",
        session.id,
        session.cards.len()
    );

    let mut current = state.session.lock().await;
    if let Some(previous) = current.replace(session.clone()) {
        tracing::info!("Discarded unfinished session {}", previous.id);
    }
    Ok(session)
}

/// The card awaiting an answer in the current session.
pub async fn get_current_card(state: &AppState) -> Result<Option<Flashcard>, CommandError> {
    let current = state.session.lock().await;
    let session = current.as_ref().ok_or_else(no_active_session)?;
    Ok(session.current_card().cloned())
}

/// Record an answer for the current card.
///
/// Answering the last card saves the report and ends the session. If the
/// save fails the completed session is kept so `save_session` can retry.
pub async fn submit_answer(
    user_answer: String,
    highlighter: &Highlighter,
    state: &AppState,
) -> Result<SubmitResponse, CommandError> {
    let mut current = state.session.lock().await;
    let session = current.as_mut().ok_or_else(no_active_session)?;

    let Some(card) = session.current_card().cloned() else {
        return Err(CommandError::new(
            ErrorKind::Session,
            format!(
                "session {} already has every answer but its report is not saved; retry with save_session",
                session.id
            ),
        ));
    };
    let highlighted = highlight_answer(&user_answer, &card, highlighter);
    let result = session.answer_current(user_answer)?.clone();

    let mut response = SubmitResponse {
        result,
        highlighted,
        remaining: session.remaining(),
        report_filename: None,
    };

    if session.completed_at.is_some() {
        let notes_dir = state.notes_dir().await?;
        response.report_filename = Some(save_report(&notes_dir, session).await?);
        *current = None;
    }

    Ok(response)
}

/// Save the current session's report, answered cards so far included.
pub async fn save_session(state: &AppState) -> Result<String, CommandError> {
    let mut current = state.session.lock().await;
    let session = current.as_ref().ok_or_else(no_active_session)?;

    let notes_dir = state.notes_dir().await?;
    let filename = save_report(&notes_dir, session).await?;

    if session.completed_at.is_some() {
        *current = None;
    }
    Ok(filename)
}

/// Drop the current session without writing anything.
pub async fn abandon_session(state: &AppState) -> bool {
    match state.session.lock().await.take() {
        Some(session) => {
            tracing::info!(
                "Abandoned session {} after {} of {} cards",
                session.id,
                session.results.len(),
                session.cards.len()
            );
            true
        }
        None => false,
    }
}
