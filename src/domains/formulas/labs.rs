//! Laboratory-derived values.

use super::error::{FormulaError, FormulaResult, positive};
use crate::domains::tools::result::round_to;

/// Absolute neutrophil count (cells/μL).
///
/// `WBC (×10³/μL) × (segmented% + bands%) / 100 × 1000`, whole cells.
pub fn absolute_neutrophil_count(
    wbc_thousands: f64,
    neutrophils_percent: f64,
    bands_percent: f64,
) -> FormulaResult<f64> {
    let granulocytes = neutrophils_percent + bands_percent;
    if granulocytes > 100.0 {
        return Err(FormulaError::inconsistent(format!(
            "neutrophils and bands add up to {granulocytes}% of white cells"
        )));
    }
    Ok(round_to(wbc_thousands * granulocytes / 100.0 * 1000.0, 0))
}

/// Albumin level (g/dL) at or above which no correction is applied.
pub const NORMAL_ALBUMIN_G_DL: f64 = 4.0;

/// Calcium corrected for hypoalbuminemia: `Ca + 0.8 × (4 − albumin)`, 2 decimals.
pub fn corrected_calcium(calcium_mg_dl: f64, albumin_g_dl: f64) -> f64 {
    if albumin_g_dl >= NORMAL_ALBUMIN_G_DL {
        calcium_mg_dl
    } else {
        round_to(
            calcium_mg_dl + 0.8 * (NORMAL_ALBUMIN_G_DL - albumin_g_dl),
            2,
        )
    }
}

/// Pediatric NAFLD fibrosis probability (%), 1 decimal.
///
/// Logistic model `z = 1.1 + 0.34·√ALT + 0.002·ALP − 1.1·log10(platelets) − 0.02·GGT`.
pub fn pnfs_probability(alt: f64, alp: f64, platelets: f64, ggt: f64) -> FormulaResult<f64> {
    let platelets = positive("platelets", platelets)?;
    if alt < 0.0 {
        return Err(FormulaError::inconsistent("ALT cannot be negative"));
    }
    let z = 1.1 + 0.34 * alt.sqrt() + 0.002 * alp - 1.1 * platelets.log10() - 0.02 * ggt;
    Ok(round_to(100.0 * z.exp() / (1.0 + z.exp()), 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anc_includes_bands() {
        assert_eq!(absolute_neutrophil_count(5.0, 40.0, 5.0).unwrap(), 2250.0);
        assert_eq!(absolute_neutrophil_count(0.0, 0.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_anc_rejects_impossible_differential() {
        let err = absolute_neutrophil_count(5.0, 95.0, 10.0).unwrap_err();
        assert!(err.to_string().contains("105%"));
    }

    #[test]
    fn test_corrected_calcium() {
        assert_eq!(corrected_calcium(8.0, 3.0), 8.8);
        assert_eq!(corrected_calcium(9.5, 4.5), 9.5);
    }

    #[test]
    fn test_pnfs_is_a_probability() {
        let low = pnfs_probability(20.0, 150.0, 300.0, 15.0).unwrap();
        let high = pnfs_probability(200.0, 600.0, 100.0, 20.0).unwrap();
        assert!((0.0..=100.0).contains(&low));
        assert!(high > low);
    }
}
