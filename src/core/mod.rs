//! Server infrastructure around the calculator catalog.
//!
//! `config` reads the environment, `server` adapts the tool registry to the
//! MCP handler trait and `transport` moves the traffic.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
