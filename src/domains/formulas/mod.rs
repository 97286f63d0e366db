//! Formula library.
//!
//! Closed-form clinical equations used by the calculators. Each function is
//! pure and deterministic, applies the published rounding, and rejects
//! inputs outside its mathematical domain with a [`FormulaError`] instead of
//! returning NaN or infinity.

pub mod body;
mod error;
pub mod fluids;
pub mod growth;
pub mod labs;
pub mod renal;
pub mod vitals;

pub use error::{FormulaError, FormulaResult};
