//! hellod-core: fixed-response HTTP listener
//!
//! One component: a listener that binds a configured TCP port and answers
//! every HTTP request with the same plain-text payload, independent of
//! method, path, headers or body. There is no routing and no per-request
//! state; the only fatal error is failing to bind the port.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod response;
pub mod server;

// Re-exports
pub use config::{ServerConfig, DEFAULT_HOSTNAME, DEFAULT_PORT};
pub use error::{Error, Result};
pub use response::FixedResponse;
pub use server::Server;
