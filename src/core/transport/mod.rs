//! Transports carrying MCP traffic to the calculator server.
//!
//! Every transport hands tool listing and tool calls to the same read-only
//! registry, so a call behaves identically whichever way it arrives.
//!
//! | feature | transport |
//! |---------|-----------|
//! | `stdio` (default) | one session on stdin/stdout |
//! | `tcp` | one session per accepted connection |
//! | `http` | JSON-RPC over `POST`, plus `/health` |

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::{BindAddress, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
