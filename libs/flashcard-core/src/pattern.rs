//! Filename patterns for selecting notes.
//!
//! A pattern is matched against the whole filename with any trailing `.md`
//! removed from both sides. `*` matches any run of characters (including
//! none); every other character, `.` included, matches itself. Matching is
//! case-sensitive.

use serde::{Deserialize, Serialize};

const MARKDOWN_EXT: &str = ".md";

/// A parsed filename pattern such as `biology.*` or `*.exam`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    raw: String,
    segments: Vec<String>,
}

impl Pattern {
    /// Parse a pattern. Every string is a valid pattern.
    pub fn new(pattern: &str) -> Self {
        let stripped = strip_markdown_ext(pattern);
        Self {
            raw: pattern.to_string(),
            segments: stripped.split('*').map(str::to_string).collect(),
        }
    }

    /// The pattern as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the pattern contains no wildcard.
    pub fn is_literal(&self) -> bool {
        self.segments.len() == 1
    }

    /// Test a filename against the pattern.
    pub fn matches(&self, filename: &str) -> bool {
        let name = strip_markdown_ext(filename);

        let (first, rest) = match self.segments.split_first() {
            Some(parts) => parts,
            None => return name.is_empty(),
        };

        if rest.is_empty() {
            return name == first.as_str();
        }

        let Some(mut remaining) = name.strip_prefix(first.as_str()) else {
            return false;
        };

        // The last segment is anchored to the end; the middle ones are found
        // left to right, each at its earliest position.
        let (last, middle) = match rest.split_last() {
            Some(parts) => parts,
            None => return true,
        };

        for segment in middle {
            match remaining.find(segment.as_str()) {
                Some(pos) => remaining = &remaining[pos + segment.len()..],
                None => return false,
            }
        }

        remaining.ends_with(last.as_str())
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Check if a filename matches a pattern.
pub fn matches(filename: &str, pattern: &str) -> bool {
    Pattern::new(pattern).matches(filename)
}

fn strip_markdown_ext(name: &str) -> &str {
    name.strip_suffix(MARKDOWN_EXT).unwrap_or(name)
}
