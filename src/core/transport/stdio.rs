//! STDIO transport: a single MCP session on stdin/stdout.
//!
//! Stdout carries protocol frames only; logs go to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

pub struct StdioTransport;

impl StdioTransport {
    /// Serve until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::session("stdio", e))?;
        info!("Ready on stdin/stdout");

        let reason = service
            .waiting()
            .await
            .map_err(|e| TransportError::session("stdio", e))?;

        info!("Client closed the session: {:?}", reason);
        Ok(())
    }
}
