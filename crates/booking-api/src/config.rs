//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Booking API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `BOOKING_API_ADDR` | Server bind address | `127.0.0.1:8091` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("BOOKING_API_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8091".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        Ok(Self { addr })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid BOOKING_API_ADDR format")]
    InvalidAddr,
}
