//! Tools domain module.
//!
//! Every pediatric calculator is exposed as an MCP tool. A call flows
//! through:
//!
//! 1. `registry.rs` - name resolution, dispatch and the failure boundary
//! 2. `schema.rs` - structural validation against the declared parameters
//! 3. the tool's handler in `definitions/` - typed decoding and calculation
//! 4. `result.rs` - classification bands and text rendering
//!
//! ## Adding a New Tool
//!
//! 1. Create a file in the right family under `definitions/`
//! 2. Declare `NAME`, `DESCRIPTION`, `PARAMS`, a params struct and `execute()`
//! 3. Add its `descriptor()` to the family's `tools()` list
//!
//! The registry checks names and parameter declarations at startup.

pub mod definitions;
pub mod descriptor;
mod error;
mod registry;
pub mod result;
pub mod schema;

pub use descriptor::ToolDescriptor;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use result::{Band, CalculationResult, Classification, Measure};
pub use schema::{ParamKind, ParamSpec, ValidationOutcome};
