//! Listener configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOST {0:?}: expected an IP address")]
    InvalidHost(String),
    #[error("invalid PORT {0:?}: expected an integer in 1..=65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: listen port, default `3000`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    /// Build config from raw `HOST` and `PORT` values. Blank values fall back
    /// to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but unparseable.
    pub fn from_vars(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { host: parse_host(host)?, port: parse_port(port)? })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_HOST),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidHost(value.to_owned())),
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => match value.parse::<u16>() {
            Ok(0) | Err(_) => Err(ConfigError::InvalidPort(value.to_owned())),
            Ok(port) => Ok(port),
        },
    }
}
