//! Core types for flashcard application.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A question/answer pair extracted from a level-2 section of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// `<filename>-<section ordinal>`.
    pub id: String,
    pub question: String,
    pub expected_answer: String,
    /// Originating filename, not the full path.
    pub source: String,
    /// Bolded spans of the expected answer, in order, duplicates kept.
    pub keywords: Vec<String>,
}

/// Cards parsed from a single note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFlashcards {
    pub cards: Vec<Flashcard>,
    pub total_questions: usize,
}

/// Snapshot of one answered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardResult {
    pub card_id: String,
    pub question: String,
    pub expected_answer: String,
    pub user_answer: String,
    pub keywords: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl FlashcardResult {
    /// Snapshot a card together with the user's answer, stamped now.
    pub fn new(card: &Flashcard, user_answer: impl Into<String>) -> Self {
        Self {
            card_id: card.id.clone(),
            question: card.question.clone(),
            expected_answer: card.expected_answer.clone(),
            user_answer: user_answer.into(),
            keywords: card.keywords.clone(),
            timestamp: Utc::now(),
        }
    }
}

/// Number of practice reports written on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub count: usize,
}
