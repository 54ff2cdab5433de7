//! Deterministic fixtures for exercising the generation pipeline.
//!
//! Useful for testing applications that embed the generator without
//! wiring up a real calendar feed or clock.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::types::{Event, EventStatus, ShareConfig};

/// A fixed "now" in mid-January 2026, so month-window assertions are
/// stable regardless of when the tests run.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

/// An approved two-hour event on the given day of the fixed month.
pub fn approved_event(id: &str, title: &str, day: u32) -> Event {
    event_with_status(id, title, day, EventStatus::Approved)
}

/// Same shape with an arbitrary moderation status.
pub fn event_with_status(id: &str, title: &str, day: u32, status: EventStatus) -> Event {
    let start = Utc.with_ymd_and_hms(2026, 1, day, 19, 0, 0).unwrap();
    Event::new(id, title, start, start + Duration::hours(2), status)
}

/// A config small enough to leave a generous line budget.
pub fn test_config() -> ShareConfig {
    ShareConfig::new("https://fourthplaces.example/events", "今月の開催予定イベント")
        .with_hashtags(["イベント", "コミュニティ"])
}
