//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading the server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid RUSH_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Where to listen and what to load at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Snapshot to import at startup instead of the built-in scenario
    pub scenario: Option<PathBuf>,
}

impl ServerConfig {
    /// Read `RUSH_ADDR` and `RUSH_SCENARIO`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("RUSH_ADDR").ok(),
            std::env::var("RUSH_SCENARIO").ok(),
        )
    }

    fn from_vars(addr: Option<String>, scenario: Option<String>) -> Result<Self, ConfigError> {
        let addr = match addr.filter(|a| !a.trim().is_empty()) {
            Some(value) => {
                let parsed = value.trim().parse();
                parsed.map_err(|source| ConfigError::InvalidAddr { value, source })?
            }
            None => Self::default().addr,
        };
        let scenario = scenario.filter(|s| !s.is_empty()).map(PathBuf::from);
        Ok(Self { addr, scenario })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            scenario: None,
        }
    }
}
