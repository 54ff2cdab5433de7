//! Event records consumed from the calendar data source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Moderation state of a submitted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Approved,
    Pending,
    Rejected,
}

/// A calendar event as supplied by the upstream data source.
///
/// The engine only reads events. Construction and mutation belong to the
/// fetch client that owns the calendar data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Upstream identifier (opaque to the engine)
    pub id: String,

    /// Display title, used verbatim in share lines
    pub title: String,

    /// When the event starts
    pub start_at: DateTime<Utc>,

    /// When the event ends
    pub end_at: DateTime<Utc>,

    /// Moderation state; only approved events are shareable
    pub status: EventStatus,

    /// Optional per-event link (not part of the share line)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Event {
    /// Create a new event.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
        status: EventStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_at,
            end_at,
            status,
            link: None,
        }
    }

    /// Attach a per-event link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Whether moderation has approved this event.
    pub fn is_approved(&self) -> bool {
        self.status == EventStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&EventStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");

        let status: EventStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(status, EventStatus::Rejected);
    }

    #[test]
    fn test_event_roundtrip() {
        let start = Utc.with_ymd_and_hms(2026, 1, 20, 19, 0, 0).unwrap();
        let event = Event::new("evt-1", "React勉強会", start, start, EventStatus::Approved)
            .with_link("https://example.com/evt-1");

        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, "evt-1");
        assert_eq!(back.title, "React勉強会");
        assert!(back.is_approved());
        assert_eq!(back.link.as_deref(), Some("https://example.com/evt-1"));
    }
}
