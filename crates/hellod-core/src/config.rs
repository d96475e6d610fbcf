//! Server configuration
//!
//! Defaults match the original deployment (port 80 on all interfaces).
//! `PORT`, `HOST` and `WORKERS` environment variables override them; a value
//! that does not parse fails startup instead of silently falling back, and a
//! worker count of zero is rejected.

use crate::{Error, Result};
use std::net::SocketAddr;

/// Default listen port
pub const DEFAULT_PORT: u16 = 80;

/// Default listen hostname
pub const DEFAULT_HOSTNAME: &str = "0.0.0.0";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub hostname: String,
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            hostname: DEFAULT_HOSTNAME.to_string(),
            workers: num_cpus::get(),
        }
    }
}

impl ServerConfig {
    /// Build a configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => parse_var("PORT", &raw)?,
            None => defaults.port,
        };
        let hostname = get("HOST").unwrap_or(defaults.hostname);
        let workers = match get("WORKERS") {
            Some(raw) => {
                let workers: usize = parse_var("WORKERS", &raw)?;
                // the runtime builder requires at least one worker thread
                if workers == 0 {
                    return Err(Error::InvalidConfig {
                        var: "WORKERS".to_string(),
                        value: raw,
                    });
                }
                workers
            }
            None => defaults.workers,
        };

        Ok(Self {
            port,
            hostname,
            workers,
        })
    }

    /// Resolve the configured hostname and port to a socket address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.hostname, self.port);
        addr.parse().map_err(|e| Error::InvalidAddress {
            addr,
            reason: format!("{e}"),
        })
    }
}

fn parse_var<T: std::str::FromStr>(var: &str, raw: &str) -> Result<T> {
    raw.parse().map_err(|_| Error::InvalidConfig {
        var: var.to_string(),
        value: raw.to_string(),
    })
}
