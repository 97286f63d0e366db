//! Pediatric calculators MCP server library.
//!
//! This crate exposes a catalog of pediatric clinical calculators (early
//! warning scores, diagnostic criteria checklists, body-surface and fluid
//! formulas) as MCP tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: parameter schemas, validation, the registry and every tool definition
//!   - **formulas**: closed-form clinical equations shared by the tools
//!
//! # Example
//!
//! ```rust,no_run
//! use pediatric_mcp_server::domains::tools::ToolRegistry;
//!
//! let registry = ToolRegistry::new().expect("catalog is consistent");
//! let args = serde_json::json!({ "weight_kg": 20, "height_cm": 110 });
//! let result = registry.dispatch("calculate_bsa", args.as_object().unwrap());
//! println!("{}", result.unwrap().render());
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
