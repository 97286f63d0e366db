//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures that stop a transport.
///
/// Tool failures never show up here: they travel inside the MCP result.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listening socket could not be bound.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// An MCP session failed to start or ended abnormally.
    #[error("{transport} session failed: {reason}")]
    Session {
        transport: &'static str,
        reason: String,
    },

    /// The HTTP server stopped with an error.
    #[error("HTTP server error: {0}")]
    Http(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn session(transport: &'static str, reason: impl ToString) -> Self {
        Self::Session {
            transport,
            reason: reason.to_string(),
        }
    }

    pub fn http(reason: impl Into<String>) -> Self {
        Self::Http(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_names_address() {
        let err = TransportError::bind(
            "127.0.0.1:3000",
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        );
        assert_eq!(err.to_string(), "failed to bind 127.0.0.1:3000: address in use");
    }

    #[test]
    fn test_session_error() {
        let err = TransportError::session("stdio", "connection closed");
        assert_eq!(err.to_string(), "stdio session failed: connection closed");
    }
}
