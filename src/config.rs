//! Server configuration from environment variables.
//!
//! - `BIND_ADDR`: listen address (default `0.0.0.0`)
//! - `PORT`: listen port (default `3000`)
//! - `HISTORY_LIMIT`: max saved calculations kept in memory (default `100`)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub history_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Read from the process environment. Unset variables take defaults;
    /// malformed ones are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with an injectable lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .with_context(|| format!("Invalid BIND_ADDR: {:?}", raw))?,
            None => defaults.bind_addr,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {:?}", raw))?,
            None => defaults.port,
        };

        let history_limit = match lookup("HISTORY_LIMIT") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid HISTORY_LIMIT: {:?}", raw))?,
            None => defaults.history_limit,
        };

        if history_limit == 0 {
            anyhow::bail!("HISTORY_LIMIT must be at least 1");
        }

        Ok(Self {
            bind_addr,
            port,
            history_limit,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
