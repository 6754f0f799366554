//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::wmata::{DefaultSelector, StationOverride, WmataConfig};

/// Default listening port.
const DEFAULT_PORT: u16 = 1122;

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected a number from 0 to 65535")]
    InvalidPort(String),
}

/// Configuration for the whole server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on (all interfaces)
    pub port: u16,
    /// Upstream client configuration
    pub wmata: WmataConfig,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    ///
    /// - `PORT`: listening port (default 1122)
    /// - `WMATA_API_SECRET_KEY`: upstream API key
    /// - `WMATA_BASE_URL`: upstream base URL override
    /// - `MOCK_SERVER`: directory of mock responses; enables mock mode
    /// - `ARRIVAL_TIME`: in mock mode, station whose predictions come from
    ///   `{code}-times.json`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let api_key = lookup("WMATA_API_SECRET_KEY").unwrap_or_else(|| {
            tracing::warn!("WMATA_API_SECRET_KEY not set. API calls will fail.");
            String::new()
        });

        let mut wmata = WmataConfig::new(api_key);

        if let Some(url) = lookup("WMATA_BASE_URL").filter(|u| !u.is_empty()) {
            wmata = wmata.with_base_url(url);
        }

        if let Some(dir) = lookup("MOCK_SERVER").filter(|d| !d.is_empty()) {
            let dir = PathBuf::from(dir);
            wmata = match lookup("ARRIVAL_TIME").filter(|c| !c.is_empty()) {
                Some(code) => {
                    wmata.with_mock_selector(dir, StationOverride::new(code, DefaultSelector))
                }
                None => wmata.with_mock_dir(dir),
            };
        }

        Ok(Self { port, wmata })
    }

    /// Address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
