//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The immutable catalog of descriptors, checked once at construction
//! - Name resolution through a flat name -> descriptor index
//! - Dispatch: validation, handler invocation and rendering, with every
//!   failure (panics included) turned into an error result

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use tracing::{error, info, instrument, warn};

use super::definitions::catalog;
use super::descriptor::ToolDescriptor;
use super::error::ToolError;
use super::result::CalculationResult;
use super::schema::{ValidationOutcome, validate};
use crate::core::config::ToolsConfig;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns every available tool.
///
/// Built once at startup and shared read-only afterwards; dispatch touches no
/// shared mutable state, so concurrent calls need no coordination.
#[derive(Debug)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Registry holding the complete catalog.
    pub fn new() -> Result<Self, ToolError> {
        Self::from_descriptors(catalog())
    }

    /// Registry holding the catalog minus the tools disabled in `config`.
    pub fn from_config(config: &ToolsConfig) -> Result<Self, ToolError> {
        let registry = Self::new()?;
        if config.disabled.is_empty() {
            return Ok(registry);
        }

        info!("Disabled tools: {}", config.disabled.join(", "));
        for name in &config.disabled {
            if !registry.index.contains_key(name.as_str()) {
                warn!("Ignoring unknown tool in MCP_DISABLED_TOOLS: {}", name);
            }
        }

        let kept = registry
            .tools
            .into_iter()
            .filter(|tool| !config.disabled.iter().any(|d| d == tool.name))
            .collect();
        let registry = Self::from_descriptors(kept)?;
        info!("{} tools enabled after filtering", registry.len());
        Ok(registry)
    }

    /// Build a registry from explicit descriptors.
    ///
    /// Fails on the first duplicate name or malformed parameter declaration.
    pub fn from_descriptors(tools: Vec<ToolDescriptor>) -> Result<Self, ToolError> {
        let mut index = HashMap::with_capacity(tools.len());
        for (position, tool) in tools.iter().enumerate() {
            tool.check()?;
            if index.insert(tool.name, position).is_some() {
                return Err(ToolError::DuplicateTool(tool.name.to_string()));
            }
        }
        Ok(Self { tools, index })
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get all tool names, in catalog order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name).collect()
    }

    /// Descriptors in catalog order.
    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both the rmcp handler and the HTTP transport list tools from here.
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolDescriptor::to_tool).collect()
    }

    /// Look up a tool by name.
    pub fn resolve(&self, name: &str) -> Result<&ToolDescriptor, ToolError> {
        self.index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// Validate and run a tool, returning its structured result.
    pub fn dispatch(&self, name: &str, args: &JsonObject) -> Result<CalculationResult, ToolError> {
        self.execute(name, args).map(|(result, _)| result)
    }

    /// Call a tool and wrap the outcome in an MCP result.
    ///
    /// Never fails: unknown tools, schema violations and calculation faults
    /// all come back as an error result carrying a single text block.
    #[instrument(skip(self, arguments))]
    pub fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        info!("Tool call: {}", name);
        let args = arguments.unwrap_or_default();

        let outcome = self.execute(name, &args).and_then(|(result, text)| {
            let structured = serde_json::to_value(&result)
                .map_err(|e| ToolError::internal(format!("cannot serialize result: {e}")))?;
            Ok((structured, text))
        });

        match outcome {
            Ok((structured, text)) => CallToolResult {
                content: vec![Content::text(text)],
                structured_content: Some(structured),
                is_error: Some(false),
                meta: None,
            },
            Err(err) => {
                if err.is_client_error() {
                    warn!("Tool call '{}' rejected: {}", name, err);
                } else {
                    error!("Tool call '{}' failed: {}", name, err);
                }
                CallToolResult::error(vec![Content::text(err.to_string())])
            }
        }
    }

    fn execute(
        &self,
        name: &str,
        args: &JsonObject,
    ) -> Result<(CalculationResult, String), ToolError> {
        let descriptor = self.resolve(name)?;

        if let ValidationOutcome::Invalid(violations) = validate(descriptor.params, args) {
            return Err(ToolError::InvalidArguments(violations));
        }

        // Optional parameters sent as null behave as if omitted.
        let args: JsonObject = args
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let run = || {
            let result = descriptor.invoke(&args)?;
            if !result.primary.value.is_finite() {
                return Err(ToolError::execution_failed(format!(
                    "{} produced a non-finite value",
                    result.primary.label
                )));
            }
            let text = result.render();
            Ok((result, text))
        };

        panic::catch_unwind(AssertUnwindSafe(run)).unwrap_or_else(|payload| {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unexpected fault".to_string());
            Err(ToolError::execution_failed(reason))
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::result::{Classification, Measure};
    use crate::domains::tools::schema::ParamSpec;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Deserialize)]
    struct DivideParams {
        numerator: f64,
        denominator: f64,
    }

    const DIVIDE_PARAMS: &[ParamSpec] = &[
        ParamSpec::number("numerator", "Numeratore").range(0.0, 100.0),
        ParamSpec::number("denominator", "Denominatore").range(0.0, 100.0),
    ];

    fn divide(p: &DivideParams) -> Result<CalculationResult, ToolError> {
        Ok(CalculationResult::new(
            "Divisione",
            Measure::quantity("Quoziente", p.numerator / p.denominator, 2, ""),
            Classification::new("Esito", "OK"),
        ))
    }

    fn exploding(_: &DivideParams) -> Result<CalculationResult, ToolError> {
        panic!("index out of range")
    }

    fn test_registry() -> ToolRegistry {
        ToolRegistry::from_descriptors(vec![
            ToolDescriptor::typed("divide", "Divide", DIVIDE_PARAMS, divide),
            ToolDescriptor::typed("explode", "Explode", DIVIDE_PARAMS, exploding),
        ])
        .unwrap()
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry();
        assert_eq!(registry.tool_names(), vec!["divide", "explode"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_names_fail_fast() {
        let err = ToolRegistry::from_descriptors(vec![
            ToolDescriptor::typed("divide", "A", DIVIDE_PARAMS, divide),
            ToolDescriptor::typed("divide", "B", DIVIDE_PARAMS, divide),
        ])
        .unwrap_err();
        assert!(matches!(err, ToolError::DuplicateTool(name) if name == "divide"));
    }

    #[test]
    fn test_invalid_parameter_declaration_fails_fast() {
        const BAD: &[ParamSpec] = &[ParamSpec::number("x", "x").range(10.0, 1.0)];
        let err = ToolRegistry::from_descriptors(vec![ToolDescriptor::typed(
            "bad", "Bad", BAD, divide,
        )])
        .unwrap_err();
        assert!(err.to_string().contains("invalid descriptor for bad"));
    }

    #[test]
    fn test_call_unknown_tool() {
        let result = test_registry().call_tool("calculate_nothing", None);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "unknown tool: calculate_nothing");
    }

    #[test]
    fn test_call_success_carries_text_and_structure() {
        let result = test_registry().call_tool(
            "divide",
            Some(args(json!({ "numerator": 10, "denominator": 4 }))),
        );
        assert_eq!(result.is_error, Some(false));
        assert!(text_of(&result).contains("Quoziente: 2.50"));
        assert_eq!(result.structured_content.unwrap()["primary"]["value"], 2.5);
    }

    #[test]
    fn test_schema_violation_stops_before_handler() {
        let result = test_registry().call_tool(
            "explode",
            Some(args(json!({ "numerator": 101, "denominator": 1 }))),
        );
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).starts_with("invalid arguments: numerator"));
    }

    #[test]
    fn test_panic_is_contained() {
        let registry = test_registry();
        let result = registry.call_tool(
            "explode",
            Some(args(json!({ "numerator": 1, "denominator": 1 }))),
        );
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "calculation failed: index out of range");

        // The registry keeps serving after a fault.
        let next = registry.call_tool(
            "divide",
            Some(args(json!({ "numerator": 1, "denominator": 1 }))),
        );
        assert_eq!(next.is_error, Some(false));
    }

    #[test]
    fn test_non_finite_result_is_a_calculation_failure() {
        let err = test_registry()
            .dispatch("divide", &args(json!({ "numerator": 1, "denominator": 0 })))
            .unwrap_err();
        assert!(matches!(err, ToolError::ExecutionFailed(_)));
    }

    #[test]
    fn test_disabled_tools_are_unknown() {
        let config = ToolsConfig {
            disabled: vec!["calculate_apgar".to_string(), "no_such_tool".to_string()],
        };
        let full = ToolRegistry::new().unwrap();
        let registry = ToolRegistry::from_config(&config).unwrap();
        assert_eq!(registry.len(), full.len() - 1);
        assert!(matches!(
            registry.resolve("calculate_apgar"),
            Err(ToolError::NotFound(_))
        ));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_disabled_tools_are_logged_when_filtering() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let config = ToolsConfig {
            disabled: vec![
                "calculate_apgar".to_string(),
                "calculate_gcs_pediatric".to_string(),
            ],
        };

        let registry = tracing::subscriber::with_default(subscriber, || {
            ToolRegistry::from_config(&config)
        })
        .unwrap();

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Disabled tools: calculate_apgar, calculate_gcs_pediatric"));
        assert!(output.contains(&format!("{} tools enabled after filtering", registry.len())));
    }

    #[tokio::test]
    async fn test_concurrent_dispatch_is_share_nothing() {
        let registry = Arc::new(test_registry());
        let calls = (0..64).map(|i| {
            let registry = registry.clone();
            tokio::spawn(async move {
                let args = args(json!({ "numerator": i, "denominator": 2 }));
                registry.dispatch("divide", &args).map(|r| r.primary.value)
            })
        });

        let results = futures::future::join_all(calls).await;
        for (i, joined) in results.into_iter().enumerate() {
            assert_eq!(joined.unwrap().unwrap(), i as f64 / 2.0);
        }
    }
}
