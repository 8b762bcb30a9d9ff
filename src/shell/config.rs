use crate::shared::infrastructure::id_generator::{IdPolicy, UnknownIdPolicy};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const HOST_VAR: &str = "CALENDAR_EVENTS_HOST";
pub const PORT_VAR: &str = "CALENDAR_EVENTS_PORT";
pub const INDEX_PATH_VAR: &str = "CALENDAR_EVENTS_INDEX_PATH";
pub const ID_POLICY_VAR: &str = "CALENDAR_EVENTS_ID_POLICY";

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_INDEX_PATH: &str = "index.html";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CALENDAR_EVENTS_HOST is not an IP address: {0}")]
    InvalidHost(String),

    #[error("CALENDAR_EVENTS_PORT is not a port number: {0}")]
    InvalidPort(String),

    #[error("CALENDAR_EVENTS_ID_POLICY: {0}")]
    InvalidIdPolicy(#[from] UnknownIdPolicy),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Resolved against the working directory of the process.
    pub index_path: PathBuf,
    pub id_policy: IdPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            id_policy: IdPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, falling back to defaults for unset or blank keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = match value(HOST_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw.clone()))?,
            None => defaults.host,
        };
        let port = match value(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };
        let index_path = value(INDEX_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.index_path);
        let id_policy = match value(ID_POLICY_VAR) {
            Some(raw) => raw.parse()?,
            None => defaults.id_policy,
        };

        Ok(Self {
            host,
            port,
            index_path,
            id_policy,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
