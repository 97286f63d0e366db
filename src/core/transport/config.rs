//! Which transport the server listens on, and where.
//!
//! The values come from `MCP_TRANSPORT` and its companions, read together
//! with the rest of the environment in [`crate::core::Config::from_env`].

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");

/// The selected transport with its settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    #[cfg(feature = "stdio")]
    Stdio,

    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// The first compiled-in transport, in stdio, tcp, http order.
impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        let transport = Self::Stdio;
        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        let transport = Self::Tcp(TcpConfig::default());
        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        let transport = Self::Http(HttpConfig::default());
        transport
    }
}

impl fmt::Display for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => f.write_str("stdio"),
            #[cfg(feature = "tcp")]
            Self::Tcp(tcp) => write!(f, "tcp://{}", tcp.bind),
            #[cfg(feature = "http")]
            Self::Http(http) => write!(f, "http://{}{}", http.bind, http.rpc_path),
        }
    }
}

/// Host and port a network transport binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindAddress {
    #[serde(default = "BindAddress::loopback_host")]
    pub host: String,
    pub port: u16,
}

impl BindAddress {
    pub const LOOPBACK: &'static str = "127.0.0.1";

    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn loopback(port: u16) -> Self {
        Self::new(Self::LOOPBACK, port)
    }

    fn loopback_host() -> String {
        Self::LOOPBACK.to_string()
    }
}

impl fmt::Display for BindAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// One MCP session per accepted connection.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpConfig {
    #[serde(flatten)]
    pub bind: BindAddress,
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    pub const DEFAULT_PORT: u16 = 3000;
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            bind: BindAddress::loopback(Self::DEFAULT_PORT),
        }
    }
}

/// JSON-RPC over `POST` on a single path.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(flatten)]
    pub bind: BindAddress,

    #[serde(default = "HttpConfig::default_rpc_path")]
    pub rpc_path: String,

    /// Allow any origin, for browser clients.
    #[serde(default = "HttpConfig::default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
impl HttpConfig {
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_RPC_PATH: &'static str = "/mcp";

    fn default_rpc_path() -> String {
        Self::DEFAULT_RPC_PATH.to_string()
    }

    fn default_cors() -> bool {
        true
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: BindAddress::loopback(Self::DEFAULT_PORT),
            rpc_path: Self::default_rpc_path(),
            enable_cors: Self::default_cors(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address_display() {
        assert_eq!(BindAddress::loopback(3000).to_string(), "127.0.0.1:3000");
        assert_eq!(BindAddress::new("0.0.0.0", 80).to_string(), "0.0.0.0:80");
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_stdio_is_the_default() {
        assert_eq!(TransportConfig::default(), TransportConfig::Stdio);
        assert_eq!(TransportConfig::Stdio.to_string(), "stdio");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_settings_fill_in_defaults() {
        let config: HttpConfig =
            serde_json::from_value(serde_json::json!({ "port": 9090 })).unwrap();
        assert_eq!(config.bind, BindAddress::loopback(9090));
        assert_eq!(config.rpc_path, "/mcp");
        assert!(config.enable_cors);
        assert_eq!(
            TransportConfig::Http(config).to_string(),
            "http://127.0.0.1:9090/mcp"
        );
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_display() {
        let config = TransportConfig::Tcp(TcpConfig::default());
        assert_eq!(config.to_string(), "tcp://127.0.0.1:3000");
    }
}
