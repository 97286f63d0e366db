//! Bacterial Meningitis Score for children.

use serde::Deserialize;

use super::super::common::Tally;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct MeningitisParams {
    pub csf_gram_stain_positive: bool,
    pub csf_anc_geq_1000: bool,
    pub csf_protein_geq_80: bool,
    pub peripheral_anc_geq_10000: bool,
    pub seizure_at_onset: bool,
}

pub static BMS_BANDS: &[Band] = &[
    Band::at_most(
        0.0,
        "MOLTO BASSO (<0.1%)",
        "Considerare dimissione con follow-up, basso rischio di meningite batterica",
    ),
    Band::at_most(
        1.0,
        "BASSO (0.4-2.5%)",
        "Valutare attentamente, considerare osservazione o ulteriori indagini",
    ),
    Band::otherwise(
        "ALTO (>8%)",
        "Ricovero e terapia antibiotica empirica raccomandata",
    ),
];

pub struct BacterialMeningitisScoreTool;

impl BacterialMeningitisScoreTool {
    pub const NAME: &'static str = "calculate_bacterial_meningitis_score";

    pub const DESCRIPTION: &'static str = "Calcola il Bacterial Meningitis Score for Children per predire il rischio di meningite batterica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean("csf_gram_stain_positive", "Colorazione di Gram positiva nel liquor"),
        ParamSpec::boolean("csf_anc_geq_1000", "Conta neutrofili nel liquor ≥1000 cell/μL"),
        ParamSpec::boolean("csf_protein_geq_80", "Proteine liquorali ≥80 mg/dL"),
        ParamSpec::boolean(
            "peripheral_anc_geq_10000",
            "Conta neutrofili periferici ≥10000 cell/μL",
        ),
        ParamSpec::boolean("seizure_at_onset", "Convulsioni all'esordio"),
    ];

    pub fn execute(params: &MeningitisParams) -> Result<CalculationResult, ToolError> {
        let tally = Tally::new()
            .add(
                params.csf_gram_stain_positive,
                "Colorazione di Gram positiva nel liquor",
                2,
            )
            .add(params.csf_anc_geq_1000, "Neutrofili liquorali ≥1000 cell/μL", 1)
            .add(params.csf_protein_geq_80, "Proteine liquorali ≥80 mg/dL", 1)
            .add(
                params.peripheral_anc_geq_10000,
                "Neutrofili periferici ≥10000 cell/μL",
                1,
            )
            .add(params.seizure_at_onset, "Convulsioni all'esordio", 1);

        let band = classify(f64::from(tally.total()), BMS_BANDS)?;
        let result = CalculationResult::new(
            "Bacterial Meningitis Score for Children",
            Measure::score("Punteggio totale", tally.total()).out_of(6),
            Classification::from_band("Rischio di meningite batterica", band),
        );

        Ok(tally
            .itemize(result, "Nessun criterio presente")
            .note("Applicabile a bambini ≥2 mesi con meningite a liquor limpido")
            .note("Non applicabile in caso di antibioticoterapia nelle 72h precedenti")
            .note("Non applicabile in caso di comorbilità o immunodepressione"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([BMS_BANDS])
    }
}
