//! TCP transport implementation.
//!
//! Each accepted connection gets its own MCP session on its own task. Sessions
//! share the server's read-only registry and nothing else.

use rmcp::ServiceExt;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tracing::{Instrument, info, info_span, warn};

use super::{TcpConfig, TransportError, TransportResult};
use crate::core::McpServer;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    pub fn address(&self) -> String {
        self.config.bind.to_string()
    }

    /// Run the TCP transport. Only returns if binding fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (MCP over TCP)", addr);

        let mut session_id: u64 = 0;
        loop {
            let (stream, peer_addr) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    // Back off briefly so a persistent error does not spin
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                    continue;
                }
            };

            session_id += 1;
            if let Err(e) = stream.set_nodelay(true) {
                warn!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
            }

            let span = info_span!("session", id = session_id, peer = %peer_addr);
            tokio::spawn(Self::serve_connection(server.clone(), stream, peer_addr).instrument(span));
        }
    }

    /// Serve one MCP session over an accepted connection.
    async fn serve_connection(server: McpServer, stream: TcpStream, peer_addr: SocketAddr) {
        let service = match server.serve(stream).await {
            Ok(service) => service,
            Err(e) => {
                warn!("Session setup with {} failed: {}", peer_addr, e);
                return;
            }
        };
        info!("Client {} connected", peer_addr);

        match service.waiting().await {
            Ok(reason) => info!("Client {} disconnected: {:?}", peer_addr, reason),
            Err(e) => warn!("Session with {} ended with error: {}", peer_addr, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::BindAddress;

    #[test]
    fn test_address() {
        let transport = TcpTransport::new(TcpConfig {
            bind: BindAddress::new("0.0.0.0", 4100),
        });
        assert_eq!(transport.address(), "0.0.0.0:4100");
    }
}
