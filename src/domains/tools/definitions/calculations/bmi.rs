//! Pediatric BMI with an approximate nutritional classification.

use serde::Deserialize;

use crate::domains::formulas::body::bmi;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct BmiParams {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_months: u32,
}

const CURVES: &str = "Confermare con curve di crescita CDC/WHO per età e sesso";

/// Cut-offs before the fifth birthday.
pub static BMI_UNDER_5_BANDS: &[Band] = &[
    Band::below(14.0, "SOTTOPESO", CURVES),
    Band::below(17.0, "NORMALE", CURVES),
    Band::below(18.0, "SOVRAPPESO", CURVES),
    Band::otherwise("OBESITÀ", CURVES),
];

pub static BMI_FROM_5_BANDS: &[Band] = &[
    Band::below(16.0, "SOTTOPESO", CURVES),
    Band::below(22.0, "NORMALE", CURVES),
    Band::below(25.0, "SOVRAPPESO", CURVES),
    Band::otherwise("OBESITÀ", CURVES),
];

pub struct BmiPediatricTool;

impl BmiPediatricTool {
    pub const NAME: &'static str = "calculate_bmi_pediatric";

    pub const DESCRIPTION: &'static str = "Calcola BMI pediatrico e valutazione nutrizionale";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("weight_kg", "Peso in kg").range(1.0, 150.0),
        ParamSpec::number("height_cm", "Altezza in cm").range(40.0, 200.0),
        ParamSpec::integer("age_months", "Età in mesi (≥24 mesi per BMI)").range(24.0, 216.0),
    ];

    pub fn execute(params: &BmiParams) -> Result<CalculationResult, ToolError> {
        let value = bmi(params.weight_kg, params.height_cm)?;
        let age_years = f64::from(params.age_months) / 12.0;
        let bands = if age_years < 5.0 {
            BMI_UNDER_5_BANDS
        } else {
            BMI_FROM_5_BANDS
        };
        let band = classify(value, bands)?;

        Ok(CalculationResult::new(
            "BMI Pediatrico",
            Measure::quantity("BMI calcolato", value, 1, "kg/m²"),
            Classification::from_band("Stato nutrizionale (approssimativo)", band),
        )
        .detail("Età", format!("{age_years:.1} anni ({} mesi)", params.age_months))
        .detail("Peso", format!("{} kg", params.weight_kg))
        .detail("Altezza", format!("{} cm", params.height_cm))
        .note("Il BMI pediatrico varia con età e sesso: la classificazione è semplificata")
        .note("BMI valido da 2 anni in poi"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([BMI_UNDER_5_BANDS, BMI_FROM_5_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(weight_kg: f64, height_cm: f64, age_months: u32) -> CalculationResult {
        BmiPediatricTool::execute(&BmiParams {
            weight_kg,
            height_cm,
            age_months,
        })
        .unwrap()
    }

    #[test]
    fn test_cutoffs_change_at_five_years() {
        // 17.4 kg/m²
        let toddler = run(17.4, 100.0, 48);
        assert_eq!(toddler.primary.value, 17.4);
        assert_eq!(toddler.classification.label, "SOVRAPPESO");

        let school_age = run(17.4, 100.0, 60);
        assert_eq!(school_age.classification.label, "NORMALE");
    }

    #[test]
    fn test_obesity() {
        let result = run(60.0, 150.0, 144);
        assert_eq!(result.primary.value, 26.7);
        assert_eq!(result.classification.label, "OBESITÀ");
    }
}
