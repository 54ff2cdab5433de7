//! Rendering events as single share lines.

use chrono::{DateTime, Datelike, Utc};

use crate::types::Event;

/// Render a date as zero-padded `MM/DD` (no year).
pub fn format_date(date: DateTime<Utc>) -> String {
    format!("{:02}/{:02}", date.month(), date.day())
}

/// Render one event as `MM/DD title`.
///
/// The title goes in verbatim. The target is a plain-text share field,
/// so there is nothing to escape.
pub fn format_line(event: &Event) -> String {
    format!("{} {}", format_date(event.start_at), event.title)
}

/// Sort events ascending by start date and render each as a line.
///
/// The sort is stable, so events starting at the same instant keep their
/// input order. Earliest events come first; truncation later drops from
/// the tail, never the head.
pub fn format_and_sort_lines(events: &[Event]) -> Vec<String> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|e| e.start_at);
    sorted.iter().map(|e| format_line(e)).collect()
}
