// Shared test fixture for calendar events.
// Defaults describe the lunch event used across the HTTP and store suites.

use crate::modules::calendar_events::core::event::Event;
use chrono::{DateTime, FixedOffset};

pub fn rfc3339(raw: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(raw).unwrap()
}

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: Event {
                id: String::new(),
                title: "Lunch".to_string(),
                description: String::new(),
                start_time: rfc3339("2025-01-01T12:00:00Z"),
                end_time: rfc3339("2025-01-01T13:00:00Z"),
                location: "Cafe".to_string(),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn start_time(mut self, v: &str) -> Self {
        self.inner.start_time = rfc3339(v);
        self
    }

    pub fn end_time(mut self, v: &str) -> Self {
        self.inner.end_time = rfc3339(v);
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.inner).unwrap()
    }
}

#[cfg(test)]
mod event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        assert_eq!(EventBuilder::default().build(), EventBuilder::new().build());
    }

    #[rstest]
    fn setters_override_all_fields() {
        let event = EventBuilder::new()
            .id("7")
            .title("Standup")
            .description("daily")
            .start_time("2025-02-03T09:00:00+01:00")
            .end_time("2025-02-03T09:15:00+01:00")
            .location("Room 4")
            .build();

        assert_eq!(event.id, "7");
        assert_eq!(event.title, "Standup");
        assert_eq!(event.description, "daily");
        assert_eq!(event.start_time, rfc3339("2025-02-03T08:00:00Z"));
        assert_eq!(event.end_time, rfc3339("2025-02-03T08:15:00Z"));
        assert_eq!(event.location, "Room 4");
    }
}
