//! Keyword highlighting for comparing a typed answer against the expected one.

use regex::Regex;
use std::ops::Range;

/// Wraps keyword occurrences in a pair of markers.
///
/// Keywords are applied one after another. Text already wrapped by an
/// earlier keyword is left alone, so when keywords overlap the one listed
/// first wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    open: String,
    close: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new("<mark>", "</mark>")
    }
}

impl Highlighter {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Wrap every case-insensitive, whole-word occurrence of each keyword.
    pub fn highlight<S: AsRef<str>>(&self, text: &str, keywords: &[S]) -> String {
        let mut highlighted = text.to_string();
        // Spans inserted by earlier keywords, markers included.
        let mut wrapped: Vec<Range<usize>> = Vec::new();

        for keyword in keywords {
            let keyword = keyword.as_ref().trim();
            if keyword.is_empty() {
                continue;
            }

            let Some(regex) = keyword_regex(keyword) else {
                continue;
            };
            highlighted = self.wrap_outside(&highlighted, &regex, &mut wrapped);
        }

        highlighted
    }

    /// Wrap matches that do not touch `wrapped`, then shift `wrapped` and
    /// add the new spans so the ranges index into the returned string.
    fn wrap_outside(&self, text: &str, regex: &Regex, wrapped: &mut Vec<Range<usize>>) -> String {
        let added = self.open.len() + self.close.len();
        let mut out = String::with_capacity(text.len());
        let mut accepted: Vec<usize> = Vec::new();
        let mut inserted = Vec::new();
        let mut last = 0;

        for m in regex.find_iter(text) {
            if wrapped.iter().any(|r| m.start() < r.end && r.start < m.end()) {
                continue;
            }
            out.push_str(&text[last..m.start()]);
            let start = out.len();
            out.push_str(&self.open);
            out.push_str(m.as_str());
            out.push_str(&self.close);
            inserted.push(start..out.len());
            accepted.push(m.start());
            last = m.end();
        }
        out.push_str(&text[last..]);

        for range in wrapped.iter_mut() {
            let shift = added * accepted.iter().filter(|&&s| s < range.start).count();
            *range = range.start + shift..range.end + shift;
        }
        wrapped.extend(inserted);

        out
    }
}

fn keyword_regex(keyword: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword))).ok()
}

/// Highlight keywords with `<mark>` tags.
pub fn highlight<S: AsRef<str>>(text: &str, keywords: &[S]) -> String {
    Highlighter::default().highlight(text, keywords)
}
