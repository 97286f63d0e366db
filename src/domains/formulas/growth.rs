//! Weight gain velocity and head circumference norms.

use super::error::{FormulaResult, positive};
use crate::domains::tools::result::round_to;

/// Average month length used to turn an interval in months into days.
pub const DAYS_PER_MONTH: f64 = 30.4;

/// Weight change between two measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightVelocity {
    /// Signed, 2 decimals.
    pub gain_kg: f64,
    /// 1 decimal.
    pub grams_per_day: f64,
    /// Whole grams.
    pub grams_per_month: f64,
}

/// Gain over `months_interval`, per day and per month.
pub fn weight_velocity(
    current_kg: f64,
    previous_kg: f64,
    months_interval: f64,
) -> FormulaResult<WeightVelocity> {
    let months = positive("months_interval", months_interval)?;
    let gain = current_kg - previous_kg;
    Ok(WeightVelocity {
        gain_kg: round_to(gain, 2),
        grams_per_day: round_to(gain * 1000.0 / (months * DAYS_PER_MONTH), 1),
        grams_per_month: round_to(gain * 1000.0 / months, 0),
    })
}

/// Mean head circumference at the tabulated ages: (months, male cm, female cm).
const HEAD_CIRCUMFERENCE_MEANS: &[(u32, f64, f64)] = &[
    (0, 34.5, 34.0),
    (1, 37.0, 36.5),
    (3, 40.0, 39.5),
    (6, 43.0, 42.5),
    (12, 46.0, 45.5),
    (24, 48.5, 48.0),
    (36, 50.0, 49.5),
];

/// Approximate mean head circumference (cm) for age and sex.
///
/// Tabulated ages use the table; other ages grow 0.95 cm/month from the
/// birth value in the first year and 0.21 cm/month from the 12-month value
/// afterwards.
pub fn mean_head_circumference(age_months: u32, is_male: bool) -> f64 {
    let pick = |male: f64, female: f64| if is_male { male } else { female };
    if let Some(&(_, male, female)) = HEAD_CIRCUMFERENCE_MEANS
        .iter()
        .find(|(months, _, _)| *months == age_months)
    {
        return pick(male, female);
    }

    let months = f64::from(age_months);
    if age_months < 12 {
        pick(34.5, 34.0) + months * 0.95
    } else {
        pick(46.0, 45.5) + (months - 12.0) * 0.21
    }
}

/// Expected head growth for age (cm per month).
pub fn expected_head_growth_cm_per_month(age_months: u32) -> f64 {
    match age_months {
        0..=3 => 2.0,
        4..=6 => 1.0,
        7..=12 => 0.5,
        _ => 0.25,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_velocity_per_day_and_month() {
        let velocity = weight_velocity(7.0, 6.1, 1.0).unwrap();
        assert_eq!(velocity.gain_kg, 0.9);
        assert_eq!(velocity.grams_per_day, 29.6);
        assert_eq!(velocity.grams_per_month, 900.0);
    }

    #[test]
    fn test_weight_loss_is_negative() {
        let velocity = weight_velocity(10.0, 10.5, 2.0).unwrap();
        assert_eq!(velocity.gain_kg, -0.5);
        assert!(velocity.grams_per_day < 0.0);
    }

    #[test]
    fn test_weight_velocity_rejects_zero_interval() {
        assert!(weight_velocity(10.0, 9.0, 0.0).is_err());
    }

    #[test]
    fn test_tabulated_head_circumference() {
        assert_eq!(mean_head_circumference(0, true), 34.5);
        assert_eq!(mean_head_circumference(12, false), 45.5);
        assert_eq!(mean_head_circumference(36, true), 50.0);
    }

    #[test]
    fn test_head_circumference_between_table_ages() {
        assert_eq!(round_to(mean_head_circumference(9, true), 2), 43.05);
        assert_eq!(round_to(mean_head_circumference(18, false), 2), 46.76);
    }

    #[test]
    fn test_expected_head_growth_slows_with_age() {
        assert_eq!(expected_head_growth_cm_per_month(2), 2.0);
        assert_eq!(expected_head_growth_cm_per_month(6), 1.0);
        assert_eq!(expected_head_growth_cm_per_month(12), 0.5);
        assert_eq!(expected_head_growth_cm_per_month(30), 0.25);
    }
}
