//! Markdown parser for flashcard notes.
//!
//! # Format
//! ```markdown
//! # Cell biology
//!
//! ## What is the powerhouse of the cell?
//! The **mitochondria**, which produces **ATP**.
//!
//! ## What surrounds the cell?
//! The **cell membrane**.
//! ```
//!
//! Every level-2 header starts a card: the header text is the question and
//! the body up to the next level-2 header is the expected answer. Bolded
//! spans of the answer become its keywords. Text before the first level-2
//! header never becomes a card.

use crate::types::{Flashcard, ParsedFlashcards};
use regex::Regex;
use std::sync::LazyLock;

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_compile_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}

static SECTION_MARKER: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"(?m)^## "));
static BOLD: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"\*\*([^*]+)\*\*"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"\*([^*]+)\*"));
static UNDERSCORE_ITALIC: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"_([^_]+)_"));
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"`([^`]+)`"));

/// Parse markdown content into flashcards.
///
/// Card ids are `<filename>-<n>` where `n` counts every non-blank piece of
/// the document split on level-2 markers, the leading text included. A
/// skipped section (empty question or answer) still uses up its number, so
/// the ids of later cards stay put.
pub fn parse(content: &str, filename: &str) -> ParsedFlashcards {
    let mut cards = Vec::new();

    let pieces = SECTION_MARKER
        .split(content)
        .enumerate()
        .filter(|(_, piece)| !piece.trim().is_empty());

    for (index, (raw_index, section)) in pieces.enumerate() {
        // The piece ahead of the first marker is the preamble.
        if raw_index == 0 {
            continue;
        }

        if let Some(card) = parse_section(section, filename, index) {
            cards.push(card);
        }
    }

    ParsedFlashcards {
        total_questions: cards.len(),
        cards,
    }
}

fn parse_section(section: &str, filename: &str, index: usize) -> Option<Flashcard> {
    let (question, answer) = match section.split_once('\n') {
        Some((first, rest)) => (first.trim(), rest.trim()),
        None => (section.trim(), ""),
    };

    if question.is_empty() || answer.is_empty() {
        return None;
    }

    Some(Flashcard {
        id: format!("{}-{}", filename, index),
        question: question.to_string(),
        expected_answer: answer.to_string(),
        source: filename.to_string(),
        keywords: extract_keywords(answer),
    })
}

/// Extract `**bold**` spans, left to right, keeping duplicates.
pub fn extract_keywords(text: &str) -> Vec<String> {
    BOLD.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Strip inline markdown emphasis and code markers for display.
pub fn clean_markdown(text: &str) -> String {
    let text = BOLD.replace_all(text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = UNDERSCORE_ITALIC.replace_all(&text, "$1");
    INLINE_CODE.replace_all(&text, "$1").into_owned()
}
