//! BGS Geology 50K MCP Server Library
//!
//! Exposes the British Geological Survey 1:50,000 detailed geology Web Map
//! Service to MCP clients as a small set of tools.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **geology**: Layer catalog, WMS request building and the HTTP client
//!   - **tools**: MCP tools that wrap the geology service
//!
//! # Example
//!
//! ```rust,no_run
//! use bgs_geology_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
