//! Markdown reports for finished practice sessions.
//!
//! Reports are written next to the notes as
//! `flashcard-session.<YYYY-MM-DD>.<session id>.md`, dated by the session's
//! creation day in UTC.

use crate::session::FlashcardSession;
use crate::types::DayActivity;
use chrono::{Days, NaiveDate, SecondsFormat};
use std::collections::HashMap;

/// Filename prefix shared by every report.
pub const REPORT_PREFIX: &str = "flashcard-session.";

const REPORT_EXT: &str = ".md";

/// Longest history `activity` reports, about ten years.
pub const MAX_ACTIVITY_DAYS: usize = 3660;

/// Render a session's results as a Markdown document.
pub fn render_report(session: &FlashcardSession) -> String {
    let mut content = String::from("# Flashcard Session Results\n\n");

    content.push_str(&format!(
        "**Pattern:** {}\n**Date:** {}\n**Total Questions:** {}\n**Completed:** {}\n\n---\n\n",
        session.pattern,
        session
            .created_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        session.cards.len(),
        session.results.len(),
    ));

    for (index, result) in session.results.iter().enumerate() {
        content.push_str(&format!(
            "## Question {}\n\n**Q:** {}\n\n**Your Answer:**\n{}\n\n**Expected Answer:**\n{}\n\n",
            index + 1,
            result.question,
            result.user_answer,
            result.expected_answer,
        ));

        if !result.keywords.is_empty() {
            content.push_str(&format!("**Keywords:** {}\n\n", result.keywords.join(", ")));
        }

        content.push_str("---\n\n");
    }

    content
}

/// Filename the session's report is saved under.
pub fn report_filename(session: &FlashcardSession) -> String {
    format!(
        "{}{}.{}{}",
        REPORT_PREFIX,
        session.created_at.date_naive().format("%Y-%m-%d"),
        session.id,
        REPORT_EXT
    )
}

/// Whether a filename looks like a saved report.
pub fn is_report_filename(filename: &str) -> bool {
    filename.starts_with(REPORT_PREFIX) && filename.ends_with(REPORT_EXT)
}

/// Date embedded in a report filename.
pub fn report_date(filename: &str) -> Option<NaiveDate> {
    let rest = filename.strip_prefix(REPORT_PREFIX)?;
    let date = rest.get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Reports per day for the `days` days ending on `today`, oldest first.
///
/// `days` is capped at `MAX_ACTIVITY_DAYS`, and the series stops early at
/// the earliest representable date.
pub fn activity<S: AsRef<str>>(filenames: &[S], today: NaiveDate, days: usize) -> Vec<DayActivity> {
    let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
    for date in filenames.iter().filter_map(|f| report_date(f.as_ref())) {
        *counts.entry(date).or_default() += 1;
    }

    let mut data: Vec<DayActivity> = (0..days.min(MAX_ACTIVITY_DAYS))
        .map_while(|i| today.checked_sub_days(Days::new(i as u64)))
        .map(|date| DayActivity {
            date,
            count: counts.get(&date).copied().unwrap_or(0),
        })
        .collect();

    // Reverse so oldest is first
    data.reverse();
    data
}

/// Bucket a day's report count into a heatmap intensity from 0 to 4.
pub fn intensity(count: usize) -> u8 {
    match count {
        0 => 0,
        1 => 1,
        2..=3 => 2,
        4..=5 => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Flashcard, FlashcardResult};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn sample_session() -> FlashcardSession {
        let cards = vec![
            Flashcard {
                id: "bio.md-0".to_string(),
                question: "Powerhouse?".to_string(),
                expected_answer: "The **mitochondria**".to_string(),
                source: "bio.md".to_string(),
                keywords: vec!["mitochondria".to_string()],
            },
            Flashcard {
                id: "bio.md-1".to_string(),
                question: "Colour of grass?".to_string(),
                expected_answer: "Green".to_string(),
                source: "bio.md".to_string(),
                keywords: vec![],
            },
        ];
        let mut session = FlashcardSession::new("bio.*", cards.clone());
        session.id = "session-1".to_string();
        session.created_at = Utc.with_ymd_and_hms(2024, 3, 9, 23, 30, 0).unwrap();
        for (card, answer) in cards.iter().zip(["mitochondria", "blue"]) {
            session.record_result(FlashcardResult::new(card, answer)).unwrap();
        }
        session
    }

    #[test]
    fn renders_full_report() {
        let expected = "# Flashcard Session Results\n\n\
            **Pattern:** bio.*\n\
            **Date:** 2024-03-09T23:30:00.000Z\n\
            **Total Questions:** 2\n\
            **Completed:** 2\n\n\
            ---\n\n\
            ## Question 1\n\n\
            **Q:** Powerhouse?\n\n\
            **Your Answer:**\nmitochondria\n\n\
            **Expected Answer:**\nThe **mitochondria**\n\n\
            **Keywords:** mitochondria\n\n\
            ---\n\n\
            ## Question 2\n\n\
            **Q:** Colour of grass?\n\n\
            **Your Answer:**\nblue\n\n\
            **Expected Answer:**\nGreen\n\n\
            ---\n\n";
        assert_eq!(render_report(&sample_session()), expected);
    }

    #[test]
    fn partial_session_lists_only_answered() {
        let mut session = sample_session();
        session.results.truncate(1);
        let report = render_report(&session);
        assert!(report.contains("**Total Questions:** 2\n**Completed:** 1\n"));
        assert!(report.contains("## Question 1"));
        assert!(!report.contains("## Question 2"));
    }

    #[test]
    fn filename_uses_creation_day() {
        let session = sample_session();
        let name = report_filename(&session);
        assert_eq!(name, "flashcard-session.2024-03-09.session-1.md");
        assert!(is_report_filename(&name));
        assert_eq!(report_date(&name), NaiveDate::from_ymd_opt(2024, 3, 9));
    }

    #[test]
    fn report_filename_detection() {
        assert!(!is_report_filename("bio.101.md"));
        assert!(!is_report_filename("flashcard-session.2024-03-09.txt"));
        assert_eq!(report_date("flashcard-session.garbage.md"), None);
        assert_eq!(report_date("bio.md"), None);
    }

    #[test]
    fn activity_counts_per_day() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let files = [
            "flashcard-session.2024-03-10.session-a.md",
            "flashcard-session.2024-03-10.session-b.md",
            "flashcard-session.2024-03-08.session-c.md",
            "flashcard-session.2023-01-01.session-old.md",
            "notes.md",
        ];
        let data = activity(&files, today, 3);
        let counts: Vec<_> = data.iter().map(|d| (d.date.to_string(), d.count)).collect();
        assert_eq!(
            counts,
            vec![
                ("2024-03-08".to_string(), 1),
                ("2024-03-09".to_string(), 0),
                ("2024-03-10".to_string(), 2),
            ]
        );
    }

    #[test]
    fn activity_caps_long_histories() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let none: [&str; 0] = [];

        let data = activity(&none, today, 200_000_000);
        assert_eq!(data.len(), MAX_ACTIVITY_DAYS);
        assert_eq!(data.last().map(|d| d.date), Some(today));
    }

    #[test]
    fn activity_stops_at_earliest_date() {
        let data = activity(&["flashcard-session.x.md"], NaiveDate::MIN, 5);
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].date, NaiveDate::MIN);
    }

    #[test]
    fn intensity_buckets() {
        let buckets: Vec<_> = [0, 1, 2, 3, 4, 5, 6, 40].iter().map(|c| intensity(*c)).collect();
        assert_eq!(buckets, vec![0, 1, 2, 2, 3, 3, 4, 4]);
    }
}
