//! Fluid requirement corrected for fever.

use serde::Deserialize;

use crate::domains::formulas::fluids::{FEVER_INCREASE_PERCENT_PER_C, fever_fluids};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification, Measure};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct FeverFluidsParams {
    pub weight_kg: f64,
    pub temperature_celsius: f64,
    pub baseline_fluids_ml: f64,
}

pub struct FeverFluidsTool;

impl FeverFluidsTool {
    pub const NAME: &'static str = "calculate_fever_fluid_requirements";

    pub const DESCRIPTION: &'static str =
        "Calcola aumento fabbisogno idrico in caso di febbre secondo regola clinica 10-15%/°C";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("weight_kg", "Peso in chilogrammi").range(2.0, 100.0),
        ParamSpec::number("temperature_celsius", "Temperatura corporea in gradi Celsius")
            .range(37.5, 42.0),
        ParamSpec::number(
            "baseline_fluids_ml",
            "Fluidi di base giornalieri (ml/24h) - può essere calcolato con Holiday-Segar",
        )
        .range(100.0, 5000.0),
    ];

    pub fn execute(params: &FeverFluidsParams) -> Result<CalculationResult, ToolError> {
        let fluids = fever_fluids(params.baseline_fluids_ml, params.temperature_celsius)?;

        Ok(CalculationResult::new(
            "Fabbisogno Idrico in Febbre",
            Measure::quantity("Totale necessario", fluids.total_ml, 0, "ml/24h"),
            Classification::new(
                "Incremento per febbre",
                format!("+{:.1}%", fluids.increase_percent),
            ),
        )
        .detail(
            "Paziente",
            format!("{} kg, T° {}°C", params.weight_kg, params.temperature_celsius),
        )
        .detail(
            "Temperatura sopra normale",
            format!("+{:.1}°C", fluids.degrees_above_normal),
        )
        .detail("Baseline (normotermia)", format!("{} ml/24h", params.baseline_fluids_ml))
        .detail("Incremento", format!("+{} ml/24h", fluids.additional_ml))
        .detail("Per ora", format!("{:.1} ml/h", fluids.hourly_ml))
        .detail("Ogni 6 ore", format!("{} ml", fluids.every_6h_ml))
        .detail("Ogni 8 ore", format!("{} ml", fluids.every_8h_ml))
        .note(format!(
            "Regola clinica: +10-15% per ogni °C sopra 37°C (applicato {FEVER_INCREASE_PERCENT_PER_C}%)"
        ))
        .note("Perdite insensibili aumentate da sudorazione, tachipnea e vasodilatazione")
        .note("Monitorare segni di disidratazione e tolleranza orale; aumentare se diarrea")
        .note("Mantenere Na+ 135-145 mEq/L; monitorare gli elettroliti se febbre >48h"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}
