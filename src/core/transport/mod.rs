//! Transports that carry MCP traffic to the geology server.
//!
//! - `stdio` (default): one session over stdin/stdout, what desktop MCP
//!   clients launch
//! - `tcp`: line-delimited JSON-RPC, one session per accepted socket
//! - `http`: JSON-RPC over `POST` on a configurable path, plus `/health`
//!
//! `TransportService` picks the transport from [`TransportConfig`]. At least
//! one of the features must be enabled.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

// Re-export configs for convenience
#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
