//! Body size and growth formulas.

use super::error::{FormulaResult, positive};
use crate::domains::tools::result::round_to;

/// Body surface area (m²) by DuBois: `0.007184 × W^0.425 × H^0.725`, 2 decimals.
pub fn bsa_dubois(weight_kg: f64, height_cm: f64) -> FormulaResult<f64> {
    let w = positive("weight_kg", weight_kg)?;
    let h = positive("height_cm", height_cm)?;
    Ok(round_to(0.007184 * w.powf(0.425) * h.powf(0.725), 2))
}

/// Body surface area (m²) by Mosteller: `√(W × H / 3600)`, 2 decimals.
pub fn bsa_mosteller(weight_kg: f64, height_cm: f64) -> FormulaResult<f64> {
    let w = positive("weight_kg", weight_kg)?;
    let h = positive("height_cm", height_cm)?;
    Ok(round_to((w * h / 3600.0).sqrt(), 2))
}

/// Body mass index (kg/m²), 1 decimal.
pub fn bmi(weight_kg: f64, height_cm: f64) -> FormulaResult<f64> {
    let w = positive("weight_kg", weight_kg)?;
    let h = positive("height_cm", height_cm)? / 100.0;
    Ok(round_to(w / (h * h), 1))
}

/// Half-width of the mid-parental target range, in cm.
pub const TARGET_HEIGHT_RANGE_CM: f64 = 8.5;

/// Mid-parental target height (cm), 1 decimal.
///
/// `(father + mother ± 13) / 2`, adding 13 cm for boys and subtracting it for girls.
pub fn predicted_adult_height(father_cm: f64, mother_cm: f64, is_male: bool) -> f64 {
    let sex_correction = if is_male { 13.0 } else { -13.0 };
    round_to((father_cm + mother_cm + sex_correction) / 2.0, 1)
}

/// Percentage of each region burned, 0-100 per region.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BurnedRegions {
    pub head: f64,
    pub trunk: f64,
    pub arms: f64,
    pub hands: f64,
    pub legs: f64,
    pub feet: f64,
    pub genitals: f64,
}

/// Lund-Browder share of total body surface for head and legs, by age.
fn lund_browder_head_legs(age_years: f64) -> (f64, f64) {
    if age_years <= 1.0 {
        (0.19, 0.13)
    } else if age_years <= 4.0 {
        (0.17, 0.15)
    } else if age_years <= 9.0 {
        (0.13, 0.16)
    } else {
        (0.07, 0.18)
    }
}

/// Burned total body surface area (%TBSA) by Lund-Browder, 1 decimal.
pub fn burned_tbsa(age_years: f64, regions: &BurnedRegions) -> f64 {
    let (head, legs) = lund_browder_head_legs(age_years);
    let weighted = [
        (head, regions.head),
        (0.32, regions.trunk),
        (0.14, regions.arms),
        (0.05, regions.hands),
        (legs, regions.legs),
        (0.07, regions.feet),
        (0.01, regions.genitals),
    ]
    .iter()
    .map(|(share, percent)| share * percent / 100.0)
    .sum::<f64>();

    round_to(weighted * 100.0, 1)
}
