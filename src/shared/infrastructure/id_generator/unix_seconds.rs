use crate::shared::infrastructure::id_generator::IdGenerator;
use chrono::{DateTime, Utc};

/// Renders the current wall clock as whole Unix seconds.
pub struct UnixSecondsIdGenerator {
    clock: fn() -> DateTime<Utc>,
}

impl UnixSecondsIdGenerator {
    pub fn new() -> Self {
        Self { clock: Utc::now }
    }

    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self { clock }
    }
}

impl Default for UnixSecondsIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for UnixSecondsIdGenerator {
    fn next_id(&self) -> String {
        (self.clock)().timestamp().to_string()
    }
}
