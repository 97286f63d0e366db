//! Approximate normal blood pressure for age.

use serde::Deserialize;

use crate::domains::formulas::vitals::normal_blood_pressure;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification, Measure};
use crate::domains::tools::schema::ParamSpec;

fn default_height_percentile() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize)]
pub struct NormalBloodPressureParams {
    pub age_years: f64,
    /// Reported only; the simplified formula ignores height.
    #[serde(default = "default_height_percentile")]
    pub height_percentile: u32,
}

pub struct NormalBloodPressureTool;

impl NormalBloodPressureTool {
    pub const NAME: &'static str = "calculate_normal_blood_pressure";

    pub const DESCRIPTION: &'static str =
        "Calcola valori normali di pressione arteriosa per età pediatrica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("age_years", "Età in anni").range(0.0, 18.0),
        ParamSpec::integer("height_percentile", "Percentile di altezza (default 50°)")
            .range(5.0, 95.0)
            .default_number(50.0),
    ];

    pub fn execute(params: &NormalBloodPressureParams) -> Result<CalculationResult, ToolError> {
        let bp = normal_blood_pressure(params.age_years);

        Ok(CalculationResult::new(
            "Pressione Arteriosa Normale Pediatrica",
            Measure::quantity("Sistolica normale", bp.systolic_50th, 0, "mmHg"),
            Classification::new(
                "Soglia ipertensione (90° percentile)",
                format!("{:.0}/{:.0} mmHg", bp.systolic_90th, bp.diastolic_90th),
            )
            .recommending("Confermare valori elevati su 3 visite separate"),
        )
        .detail("Età", format!("{} anni", params.age_years))
        .detail("Percentile altezza", format!("{}°", params.height_percentile))
        .detail("Diastolica normale", format!("{:.0} mmHg", bp.diastolic_50th))
        .detail("Sistolica 90° percentile", format!("{:.0} mmHg", bp.systolic_90th))
        .detail("Diastolica 90° percentile", format!("{:.0} mmHg", bp.diastolic_90th))
        .note("Formula semplificata: sistolica 90 + 2 × età, diastolica 50 + 1.5 × età (sotto 1 anno: 70 + 2 × mesi / 40)")
        .note("Per valutazione accurata usare tabelle per sesso, età e altezza")
        .note("Utilizzare bracciale appropriato (40% circonferenza braccio)"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}
