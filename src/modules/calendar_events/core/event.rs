use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Seconds between the Unix epoch and `0001-01-01T00:00:00Z`.
const ZERO_INSTANT_UNIX_SECONDS: i64 = -62_135_596_800;

/// A scheduled calendar entry.
///
/// Every field may be omitted on decode and falls back to its zero value,
/// so a decoded body always describes a complete record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub location: String,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            start_time: zero_instant(),
            end_time: zero_instant(),
            location: String::new(),
        }
    }
}

impl Event {
    /// Returns the same event stored under `id`.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self
        }
    }
}

/// The instant an omitted `start_time` or `end_time` decodes to.
pub fn zero_instant() -> DateTime<FixedOffset> {
    DateTime::<Utc>::from_timestamp(ZERO_INSTANT_UNIX_SECONDS, 0)
        .unwrap_or_default()
        .fixed_offset()
}
