//! Age-based vital sign references.

use crate::domains::tools::result::round_to;

/// Approximate normal blood pressure for age (mmHg).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloodPressureNorms {
    pub systolic_50th: f64,
    pub diastolic_50th: f64,
    pub systolic_90th: f64,
    pub diastolic_90th: f64,
}

/// Offset between the 50th and 90th percentile estimates.
const PERCENTILE_90_OFFSET: f64 = 10.0;

/// Under one year systolic grows 2 mmHg per month from 70 with diastolic at 40;
/// afterwards systolic is `90 + 2·age` and diastolic `50 + 1.5·age`.
pub fn normal_blood_pressure(age_years: f64) -> BloodPressureNorms {
    let (systolic, diastolic) = if age_years < 1.0 {
        (70.0 + 2.0 * age_years * 12.0, 40.0)
    } else {
        (90.0 + 2.0 * age_years, 50.0 + 1.5 * age_years)
    };
    BloodPressureNorms {
        systolic_50th: round_to(systolic, 0),
        diastolic_50th: round_to(diastolic, 0),
        systolic_90th: round_to(systolic + PERCENTILE_90_OFFSET, 0),
        diastolic_90th: round_to(diastolic + PERCENTILE_90_OFFSET, 0),
    }
}
