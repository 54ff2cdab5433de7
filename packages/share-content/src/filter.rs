//! Eligibility filtering for shareable events.

use chrono::{DateTime, Datelike, Utc};

use crate::types::Event;

/// Select the events worth sharing right now.
///
/// An event is eligible when it is approved, starts in the same calendar
/// year and month as `now`, and starts today or later. Time of day is
/// ignored, so an event that already began earlier today still counts.
///
/// Pure function of its inputs; returns an empty vec, never an error,
/// when nothing matches.
pub fn eligible_events(events: &[Event], now: DateTime<Utc>) -> Vec<Event> {
    events
        .iter()
        .filter(|e| {
            e.is_approved()
                && e.start_at.year() == now.year()
                && e.start_at.month() == now.month()
                && e.start_at.day() >= now.day()
        })
        .cloned()
        .collect()
}
