//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::TransportConfig;
#[cfg(any(feature = "tcp", feature = "http"))]
use super::transport::BindAddress;
#[cfg(feature = "http")]
use super::transport::HttpConfig;
#[cfg(feature = "tcp")]
use super::transport::TcpConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Tools domain configuration.
    pub tools: ToolsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the tools domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Tool names hidden from the catalog.
    #[serde(default)]
    pub disabled: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "pediatric-calculators".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            tools: ToolsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_DISABLED_TOOLS`,
    /// `MCP_TRANSPORT`.
    ///
    /// Runs before logging is initialized, so it reports nothing itself.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps, true);
        }

        if let Ok(disabled) = std::env::var("MCP_DISABLED_TOOLS") {
            config.tools.disabled = parse_list(&disabled);
        }

        config.transport = transport_from_env();

        config
    }
}

/// Select the transport from `MCP_TRANSPORT` (`stdio`, `tcp` or `http`).
///
/// Names of transports not compiled in fall back to the default.
fn transport_from_env() -> TransportConfig {
    let selected = std::env::var("MCP_TRANSPORT").unwrap_or_default();
    match selected.trim().to_lowercase().as_str() {
        #[cfg(feature = "tcp")]
        "tcp" => TransportConfig::Tcp(TcpConfig {
            bind: bind_from_env("MCP_TCP", TcpConfig::DEFAULT_PORT),
        }),
        #[cfg(feature = "http")]
        "http" => TransportConfig::Http(HttpConfig {
            bind: bind_from_env("MCP_HTTP", HttpConfig::DEFAULT_PORT),
            rpc_path: std::env::var("MCP_HTTP_PATH")
                .unwrap_or_else(|_| HttpConfig::DEFAULT_RPC_PATH.to_string()),
            enable_cors: std::env::var("MCP_HTTP_CORS")
                .map(|v| parse_flag(&v, true))
                .unwrap_or(true),
        }),
        _ => TransportConfig::default(),
    }
}

/// Read `{prefix}_HOST` and `{prefix}_PORT`, keeping loopback and
/// `default_port` for missing or unparsable values.
#[cfg(any(feature = "tcp", feature = "http"))]
fn bind_from_env(prefix: &str, default_port: u16) -> BindAddress {
    let host = std::env::var(format!("{prefix}_HOST"))
        .unwrap_or_else(|_| BindAddress::LOOPBACK.to_string());
    let port = std::env::var(format!("{prefix}_PORT"))
        .ok()
        .and_then(|p| parse_port(&p))
        .unwrap_or(default_port);
    BindAddress::new(host, port)
}

#[cfg(any(feature = "tcp", feature = "http", test))]
fn parse_port(value: &str) -> Option<u16> {
    value.trim().parse().ok()
}

/// Parse a boolean-ish environment value, falling back to `default`.
fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

/// Split a comma separated list, dropping blanks.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
