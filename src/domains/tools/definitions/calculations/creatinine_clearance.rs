//! Pediatric creatinine clearance by Schwartz.

use serde::Deserialize;

use crate::domains::formulas::renal::{schwartz_egfr, schwartz_k};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatinineClearanceParams {
    pub creatinine_mg_dl: f64,
    pub height_cm: f64,
    pub age_years: f64,
}

pub static CLEARANCE_BANDS: &[Band] = &[
    Band::below(
        60.0,
        "RIDOTTA",
        "Insufficienza renale cronica: valutazione nefrologica",
    ),
    Band::below(
        90.0,
        "LIEVEMENTE RIDOTTA",
        "Monitorare funzione renale e pressione arteriosa",
    ),
    Band::otherwise("NORMALE", "Funzione renale nella norma per età"),
];

fn normal_range(age_years: f64) -> &'static str {
    if age_years < 2.0 {
        "50-80 ml/min/1.73m²"
    } else if age_years < 13.0 {
        "70-120 ml/min/1.73m²"
    } else {
        "90-130 ml/min/1.73m²"
    }
}

pub struct CreatinineClearanceTool;

impl CreatinineClearanceTool {
    pub const NAME: &'static str = "calculate_creatinine_clearance";

    pub const DESCRIPTION: &'static str =
        "Calcola clearance della creatinina pediatrica usando formula di Schwartz";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("creatinine_mg_dl", "Creatinina sierica in mg/dL").range(0.1, 10.0),
        ParamSpec::number("height_cm", "Altezza in cm").range(30.0, 200.0),
        ParamSpec::number("age_years", "Età in anni").range(0.0, 18.0),
    ];

    pub fn execute(params: &CreatinineClearanceParams) -> Result<CalculationResult, ToolError> {
        let clearance =
            schwartz_egfr(params.height_cm, params.creatinine_mg_dl, params.age_years)?;
        let band = classify(clearance, CLEARANCE_BANDS)?;

        Ok(CalculationResult::new(
            "Clearance Creatinina Pediatrica (Schwartz)",
            Measure::quantity("Clearance calcolata", clearance, 1, "ml/min/1.73m²"),
            Classification::from_band("Interpretazione", band),
        )
        .detail("Creatinina sierica", format!("{} mg/dL", params.creatinine_mg_dl))
        .detail("Altezza", format!("{} cm", params.height_cm))
        .detail("Età", format!("{} anni", params.age_years))
        .detail("Costante k", schwartz_k(params.age_years))
        .detail("Range normale", normal_range(params.age_years))
        .note("CrCl = (k × altezza) / creatinina; k = 0.45 (<1 anno), 0.55 (1-12 anni), 0.7 (≥13 anni)")
        .note("Stadi IRC: ≥90 normale, 60-89 lieve, 30-59 moderata, 15-29 severa, <15 terminale"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([CLEARANCE_BANDS])
    }
}
