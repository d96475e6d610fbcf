//! Error types for hellod-core

use std::net::SocketAddr;
use thiserror::Error;

/// Result type alias for hellod operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the fixed-response listener
#[derive(Debug, Error)]
pub enum Error {
    /// The configured port could not be acquired. Fatal at startup.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Hostname and port do not form a socket address
    #[error("Invalid listen address {addr}: {reason}")]
    InvalidAddress { addr: String, reason: String },

    /// An environment override did not parse
    #[error("Invalid value for {var}: {value:?}")]
    InvalidConfig { var: String, value: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
