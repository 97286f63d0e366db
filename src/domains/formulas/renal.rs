//! Renal function estimates.

use super::error::{FormulaResult, positive};
use crate::domains::tools::result::round_to;

/// Age-dependent constant of the original Schwartz equation.
pub fn schwartz_k(age_years: f64) -> f64 {
    if age_years < 1.0 {
        0.45
    } else if age_years < 13.0 {
        0.55
    } else {
        0.7
    }
}

/// Estimated GFR (mL/min/1.73m²) by Schwartz: `k × height / creatinine`, 1 decimal.
pub fn schwartz_egfr(height_cm: f64, creatinine_mg_dl: f64, age_years: f64) -> FormulaResult<f64> {
    let creatinine = positive("creatinine_mg_dl", creatinine_mg_dl)?;
    Ok(round_to(
        schwartz_k(age_years) * height_cm / creatinine,
        1,
    ))
}
