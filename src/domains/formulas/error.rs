//! Formula domain errors.

use thiserror::Error;

/// Result type for formula evaluation.
pub type FormulaResult<T> = Result<T, FormulaError>;

/// An input outside a formula's mathematical domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// A quantity that must be strictly positive was zero or negative.
    #[error("{quantity} must be greater than zero (got {value})")]
    NonPositive { quantity: &'static str, value: f64 },

    /// A combination of inputs that cannot occur clinically.
    #[error("{0}")]
    Inconsistent(String),
}

impl FormulaError {
    pub fn inconsistent(msg: impl Into<String>) -> Self {
        Self::Inconsistent(msg.into())
    }
}

/// Reject non-positive (or NaN) values.
pub(crate) fn positive(quantity: &'static str, value: f64) -> FormulaResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(FormulaError::NonPositive { quantity, value })
    }
}
