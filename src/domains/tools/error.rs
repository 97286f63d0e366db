//! Tool-specific error types.

use thiserror::Error;

use super::schema::ParamViolation;

/// Errors that can occur during tool registration or dispatch.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the catalog.
    #[error("unknown tool: {0}")]
    NotFound(String),

    /// The arguments did not match the tool's parameter schema.
    #[error("invalid arguments: {}", join_violations(.0))]
    InvalidArguments(Vec<ParamViolation>),

    /// The arguments passed validation but could not be decoded.
    #[error("invalid arguments: {0}")]
    MalformedArguments(String),

    /// The calculation itself failed.
    #[error("calculation failed: {0}")]
    ExecutionFailed(String),

    /// Two descriptors share a name.
    #[error("duplicate tool name: {0}")]
    DuplicateTool(String),

    /// A descriptor declares an unsatisfiable parameter.
    #[error("invalid descriptor for {tool}: {reason}")]
    InvalidDescriptor { tool: String, reason: String },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

fn join_violations(violations: &[ParamViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "malformed arguments" error.
    pub fn malformed_arguments(msg: impl Into<String>) -> Self {
        Self::MalformedArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    pub fn invalid_descriptor(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the caller can fix the failure by changing the call.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::InvalidArguments(_) | Self::MalformedArguments(_)
        )
    }
}

impl From<crate::domains::formulas::FormulaError> for ToolError {
    fn from(err: crate::domains::formulas::FormulaError) -> Self {
        Self::ExecutionFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::schema::Violation;

    #[test]
    fn test_unknown_tool_message() {
        assert_eq!(
            ToolError::not_found("calculate_foo").to_string(),
            "unknown tool: calculate_foo"
        );
    }

    #[test]
    fn test_invalid_arguments_lists_every_violation() {
        let err = ToolError::InvalidArguments(vec![
            ParamViolation {
                param: "weight_kg",
                violation: Violation::BelowMinimum {
                    value: 0.0,
                    minimum: 0.1,
                },
            },
            ParamViolation {
                param: "height_cm",
                violation: Violation::Missing,
            },
        ]);
        assert_eq!(
            err.to_string(),
            "invalid arguments: weight_kg: value 0 is below minimum 0.1; \
             height_cm: missing required parameter"
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn test_execution_failure_is_not_client_error() {
        assert!(!ToolError::execution_failed("boom").is_client_error());
    }
}
