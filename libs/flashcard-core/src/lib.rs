//! Core flashcard library for Markdown notes.
//!
//! Provides:
//! - Filename patterns for selecting notes (`biology.*`)
//! - Markdown parser turning level-2 sections into flashcards
//! - Keyword highlighting for answer comparison
//! - Practice session model and Markdown report rendering

pub mod error;
pub mod highlight;
pub mod parser;
pub mod pattern;
pub mod report;
pub mod session;
pub mod types;

pub use error::{Result, SessionError};
pub use highlight::{highlight, Highlighter};
pub use parser::{clean_markdown, extract_keywords, parse};
pub use pattern::{matches, Pattern};
pub use report::{
    activity, intensity, is_report_filename, render_report, report_date, report_filename,
    MAX_ACTIVITY_DAYS, REPORT_PREFIX,
};
pub use session::FlashcardSession;
pub use types::{DayActivity, Flashcard, FlashcardResult, ParsedFlashcards};
