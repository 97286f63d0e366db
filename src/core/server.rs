//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool registry.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool,
//! grouped by clinical family. Each tool declares its parameters and its
//! `execute()` function and is listed in its family's `tools()` catalog.
//! The registry is built once from that catalog, so
//! **adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::ToolRegistry;

/// Instructions sent to clients on initialization.
pub const INSTRUCTIONS: &str = "Pediatric clinical calculators: early-warning and severity \
scores, diagnostic criteria checklists and body/fluid formulas. Every tool is a pure \
calculation over validated inputs; results are written in Italian.";

/// The main MCP server handler.
///
/// Cloning is cheap: configuration and registry are shared behind `Arc`
/// and never mutated after construction.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Immutable tool catalog and dispatcher.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when the tool catalog is inconsistent (duplicate names or
    /// malformed parameter declarations).
    pub fn new(config: Config) -> Result<Self> {
        let registry = ToolRegistry::from_config(&config.tools)?;
        info!("Registered {} tools", registry.len());

        Ok(Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    // ========================================================================
    // JSON Support Methods (HTTP transport)
    // ========================================================================

    /// List all available tools as JSON objects.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.registry
            .get_all_tools()
            .iter()
            .filter_map(|tool| serde_json::to_value(tool).ok())
            .collect()
    }

    /// Call a tool by name with JSON arguments.
    ///
    /// Tool failures are part of the returned result (`isError: true`); only
    /// arguments that are not a JSON object and serialization faults are
    /// reported as `Err`.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, String> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => Some(map),
            serde_json::Value::Null => None,
            other => return Err(format!("arguments must be an object, got {other}")),
        };

        let result = self.registry.call_tool(name, arguments);
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }
}

/// ServerHandler implementation delegating tool traffic to the registry.
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.registry.get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(self.registry.call_tool(&request.name, request.arguments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    #[test]
    fn test_server_info_advertises_tools_only() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "pediatric-calculators");
    }

    #[test]
    fn test_list_tools_json_has_schemas() {
        let tools = server().list_tools();
        let bsa = tools
            .iter()
            .find(|t| t["name"] == "calculate_bsa")
            .expect("calculate_bsa listed");
        assert_eq!(bsa["inputSchema"]["required"], json!(["weight_kg", "height_cm"]));
        assert_eq!(bsa["inputSchema"]["properties"]["weight_kg"]["minimum"], json!(0.1));
    }

    #[test]
    fn test_call_tool_json_success() {
        let result = server()
            .call_tool(
                "calculate_maintenance_fluids",
                json!({ "weight_kg": 25 }),
            )
            .unwrap();
        assert_eq!(result["isError"], false);
        assert!(result["content"][0]["text"].as_str().unwrap().contains("1600"));
        assert!(result.get("structuredContent").is_some());
    }

    #[test]
    fn test_call_tool_json_failure_is_a_result() {
        let result = server()
            .call_tool("calculate_bsa", json!({ "weight_kg": 0, "height_cm": 110 }))
            .unwrap();
        assert_eq!(result["isError"], true);
        assert!(
            result["content"][0]["text"]
                .as_str()
                .unwrap()
                .contains("weight_kg: value 0 is below minimum 0.1")
        );
    }

    #[test]
    fn test_call_tool_rejects_non_object_arguments() {
        assert!(server().call_tool("calculate_bsa", json!([1, 2])).is_err());
    }
}
