//! Fluid and energy requirements.

use super::error::{FormulaResult, positive};
use crate::domains::tools::result::round_to;

/// Maintenance fluid need by Holliday-Segar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaintenanceFluids {
    /// mL per 24 h, whole millilitres.
    pub daily_ml: f64,
    /// mL per hour, 1 decimal. Also the infusion rate.
    pub hourly_ml: f64,
}

/// 100 mL/kg for the first 10 kg, 50 mL/kg for the next 10, 20 mL/kg beyond.
pub fn holliday_segar(weight_kg: f64) -> FormulaResult<MaintenanceFluids> {
    let w = positive("weight_kg", weight_kg)?;
    let daily = if w <= 10.0 {
        100.0 * w
    } else if w <= 20.0 {
        1000.0 + 50.0 * (w - 10.0)
    } else {
        1500.0 + 20.0 * (w - 20.0)
    };
    Ok(MaintenanceFluids {
        daily_ml: round_to(daily, 0),
        hourly_ml: round_to(daily / 24.0, 1),
    })
}

/// Daily energy requirement for a healthy child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaloricNeed {
    pub kcal_per_kg: f64,
    /// kcal per day, whole kilocalories.
    pub daily_kcal: f64,
}

/// Age-banded kcal/kg: 110 under 1 year, 100 under 3, 75 under 10, 55 after.
pub fn daily_calories(weight_kg: f64, age_months: f64) -> FormulaResult<CaloricNeed> {
    let w = positive("weight_kg", weight_kg)?;
    let kcal_per_kg = if age_months < 12.0 {
        110.0
    } else if age_months < 36.0 {
        100.0
    } else if age_months < 120.0 {
        75.0
    } else {
        55.0
    };
    Ok(CaloricNeed {
        kcal_per_kg,
        daily_kcal: round_to(w * kcal_per_kg, 0),
    })
}

/// Parkland burn resuscitation volume over the first 24 h.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParklandVolume {
    pub total_ml: f64,
    /// Given over the first 8 h from the burn.
    pub first_8h_ml: f64,
    /// Given over each of the following two 8 h periods.
    pub later_8h_ml: f64,
}

/// Burned area above which burn resuscitation is indicated.
pub const PARKLAND_TBSA_THRESHOLD: f64 = 10.0;

/// `3 mL × kg × %TBSA`; half in the first 8 h, a quarter in each later 8 h.
///
/// Returns `None` when resuscitation is not indicated (TBSA at or below 10%).
pub fn parkland(weight_kg: f64, tbsa_percent: f64) -> FormulaResult<Option<ParklandVolume>> {
    let w = positive("weight_kg", weight_kg)?;
    if tbsa_percent <= PARKLAND_TBSA_THRESHOLD {
        return Ok(None);
    }
    let total = 3.0 * w * tbsa_percent;
    let first = round_to(total / 2.0, 0);
    Ok(Some(ParklandVolume {
        total_ml: round_to(total, 0),
        first_8h_ml: first,
        later_8h_ml: round_to(first / 2.0, 0),
    }))
}

/// Daily sodium or potassium (mEq) added to a maintenance volume, 2 mEq per litre.
pub fn maintenance_electrolytes_meq(daily_ml: f64) -> f64 {
    round_to(daily_ml * 0.002, 0)
}

/// Reference body temperature for the fever correction (°C).
pub const NORMAL_TEMPERATURE_C: f64 = 37.0;

/// Extra fluid per °C above normal, the midpoint of the 10-15% rule.
pub const FEVER_INCREASE_PERCENT_PER_C: f64 = 12.5;

/// Daily fluid need corrected for fever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeverFluids {
    /// °C above [`NORMAL_TEMPERATURE_C`], 1 decimal.
    pub degrees_above_normal: f64,
    /// Increase over the baseline, 1 decimal.
    pub increase_percent: f64,
    pub additional_ml: f64,
    pub total_ml: f64,
    /// 1 decimal.
    pub hourly_ml: f64,
    pub every_6h_ml: f64,
    pub every_8h_ml: f64,
}

/// Baseline volume plus 12.5% per °C above 37 °C.
///
/// The splits are taken from the unrounded total.
pub fn fever_fluids(baseline_ml: f64, temperature_c: f64) -> FormulaResult<FeverFluids> {
    let baseline = positive("baseline_fluids_ml", baseline_ml)?;
    let degrees = temperature_c - NORMAL_TEMPERATURE_C;
    let increase_percent = degrees * FEVER_INCREASE_PERCENT_PER_C;
    let additional = baseline * increase_percent / 100.0;
    let total = baseline + additional;
    Ok(FeverFluids {
        degrees_above_normal: round_to(degrees, 1),
        increase_percent: round_to(increase_percent, 1),
        additional_ml: round_to(additional, 0),
        total_ml: round_to(total, 0),
        hourly_ml: round_to(total / 24.0, 1),
        every_6h_ml: round_to(total / 4.0, 0),
        every_8h_ml: round_to(total / 3.0, 0),
    })
}
