pub mod unix_seconds;
pub mod uuid_v7;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

use unix_seconds::UnixSecondsIdGenerator;
use uuid_v7::UuidV7IdGenerator;

/// Source of identifiers for newly inserted records.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Which identifier assignment strategy the store uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Whole seconds since the Unix epoch in base 10. Two inserts within the
    /// same second receive the same id and the later one replaces the earlier.
    #[default]
    UnixSeconds,
    /// Time ordered UUID v7, unique per insert.
    UuidV7,
}

impl IdPolicy {
    pub fn generator(self) -> Arc<dyn IdGenerator> {
        match self {
            IdPolicy::UnixSeconds => Arc::new(UnixSecondsIdGenerator::new()),
            IdPolicy::UuidV7 => Arc::new(UuidV7IdGenerator),
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::UnixSeconds => f.write_str("unix-seconds"),
            IdPolicy::UuidV7 => f.write_str("uuid-v7"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown id policy `{0}`, expected `unix-seconds` or `uuid-v7`")]
pub struct UnknownIdPolicy(pub String);

impl FromStr for IdPolicy {
    type Err = UnknownIdPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unix-seconds" => Ok(IdPolicy::UnixSeconds),
            "uuid-v7" => Ok(IdPolicy::UuidV7),
            _ => Err(UnknownIdPolicy(s.to_string())),
        }
    }
}
