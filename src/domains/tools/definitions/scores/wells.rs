//! Pediatric Wells score for deep vein thrombosis.

use serde::Deserialize;

use super::super::common::Tally;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct WellsParams {
    pub provoked_dvt: bool,
    pub alternative_diagnosis: bool,
    pub swelling: bool,
    pub unilateral_tenderness: bool,
    pub swelling_thigh_calf: bool,
    pub unilateral_pitting: bool,
    pub bedridden: bool,
    pub active_cancer: bool,
    pub previous_dvt: bool,
}

pub static WELLS_BANDS: &[Band] = &[
    Band::at_most(0.0, "BASSA (<5%)", "D-dimero, considerare stop se negativo"),
    Band::at_most(1.0, "MODERATA (~17%)", "Ecografia, considerare D-dimero"),
    Band::otherwise(
        "ALTA (>75%)",
        "Ecografia + anticoagulante mentre si attende",
    ),
];

pub struct WellsPediatricTool;

impl WellsPediatricTool {
    pub const NAME: &'static str = "calculate_wells_score_pediatric";

    pub const DESCRIPTION: &'static str =
        "Calcola Wells Score pediatrico per valutare probabilità di trombosi venosa profonda";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean(
            "provoked_dvt",
            "TVP provocata da traumi, chirurgia recente, immobilizzazione",
        ),
        ParamSpec::boolean("alternative_diagnosis", "Diagnosi alternativa possibile"),
        ParamSpec::boolean("swelling", "Gonfiore dell'intero arto"),
        ParamSpec::boolean(
            "unilateral_tenderness",
            "Dolorabilità unilaterale lungo sistema venoso profondo",
        ),
        ParamSpec::boolean(
            "swelling_thigh_calf",
            "Gonfiore polpaccio >3cm rispetto controlaterale",
        ),
        ParamSpec::boolean("unilateral_pitting", "Edema improntabile monolaterale"),
        ParamSpec::boolean("bedridden", "Allettamento recente >3 giorni"),
        ParamSpec::boolean("active_cancer", "Cancro attivo"),
        ParamSpec::boolean("previous_dvt", "Precedente TVP"),
    ];

    pub fn execute(params: &WellsParams) -> Result<CalculationResult, ToolError> {
        let tally = Tally::new()
            .add(params.provoked_dvt, "TVP provocata", 1)
            .add(params.alternative_diagnosis, "Diagnosi alternativa possibile", -2)
            .add(params.swelling, "Gonfiore intero arto", 1)
            .add(params.unilateral_tenderness, "Dolorabilità vene profonde", 1)
            .add(params.swelling_thigh_calf, "Gonfiore polpaccio >3cm", 1)
            .add(params.unilateral_pitting, "Edema improntabile monolaterale", 1)
            .add(params.bedridden, "Allettamento recente >3 giorni", 1)
            .add(params.active_cancer, "Cancro attivo", 1)
            .add(params.previous_dvt, "Precedente TVP", 1);

        let band = classify(f64::from(tally.total()), WELLS_BANDS)?;
        let result = CalculationResult::new(
            "Wells Score Pediatrico per TVP",
            Measure::score("Punteggio totale", tally.total()),
            Classification::from_band("Probabilità TVP", band),
        );

        Ok(tally
            .itemize(result, "Nessun criterio presente")
            .note("D-dimero falsi positivi frequenti in bambini")
            .note("Considerare fattori di rischio aggiuntivi (CVC, immobilità)"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([WELLS_BANDS])
    }
}
