//! Practice session model.
//!
//! A session owns the cards fixed at its start and grows one result per
//! answered card, in presentation order. Recording the result for the last
//! card completes it; a completed session accepts nothing further.

use crate::error::{Result, SessionError};
use crate::types::{Flashcard, FlashcardResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One practice run over a fixed set of cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardSession {
    pub id: String,
    pub pattern: String,
    pub cards: Vec<Flashcard>,
    pub results: Vec<FlashcardResult>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl FlashcardSession {
    /// Start a session over `cards`.
    pub fn new(pattern: impl Into<String>, cards: Vec<Flashcard>) -> Self {
        let created_at = Utc::now();
        let suffix = Uuid::new_v4().simple().to_string();
        Self {
            id: format!("session-{}-{}", created_at.timestamp_millis(), &suffix[..8]),
            pattern: pattern.into(),
            cards,
            results: Vec::new(),
            created_at,
            completed_at: None,
        }
    }

    /// Append a result. Completes the session when every card is answered.
    pub fn record_result(&mut self, result: FlashcardResult) -> Result<()> {
        if self.is_completed() {
            return Err(SessionError::AlreadyCompleted {
                total: self.cards.len(),
            });
        }

        self.results.push(result);
        if self.results.len() == self.cards.len() {
            self.completed_at = Some(Utc::now());
        }
        Ok(())
    }

    /// Record the user's answer to the current card.
    pub fn answer_current(&mut self, user_answer: impl Into<String>) -> Result<&FlashcardResult> {
        let result = match self.current_card() {
            Some(card) => FlashcardResult::new(card, user_answer),
            None => {
                return Err(SessionError::AlreadyCompleted {
                    total: self.cards.len(),
                })
            }
        };

        self.record_result(result)?;
        self.results.last().ok_or(SessionError::AlreadyCompleted {
            total: self.cards.len(),
        })
    }

    /// The next card awaiting an answer.
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.cards.get(self.results.len())
    }

    pub fn is_completed(&self) -> bool {
        self.results.len() >= self.cards.len()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.results.len())
    }
}
