//! Absolute neutrophil count.

use serde::Deserialize;

use crate::domains::formulas::labs::absolute_neutrophil_count;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct AncParams {
    pub wbc_count: f64,
    pub neutrophil_percent: f64,
    #[serde(default)]
    pub bands_percent: f64,
}

pub static ANC_BANDS: &[Band] = &[
    Band::below(
        500.0,
        "NEUTROPENIA SEVERA",
        "Alto rischio infettivo: in caso di febbre antibioticoterapia empirica ad ampio spettro immediata",
    ),
    Band::below(
        1000.0,
        "NEUTROPENIA MODERATA",
        "Rischio infettivo aumentato: valutazione urgente in caso di febbre",
    ),
    Band::below(
        1500.0,
        "NEUTROPENIA LIEVE",
        "Rischio infettivo minimo: ricontrollare emocromo",
    ),
    Band::otherwise("NORMALE", "Nessuna azione specifica"),
];

pub struct AncTool;

impl AncTool {
    pub const NAME: &'static str = "calculate_anc";

    pub const DESCRIPTION: &'static str =
        "Calcola l'Absolute Neutrophil Count (ANC) da WBC e percentuali neutrofili/bande";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("wbc_count", "Globuli bianchi totali (x10^3/μL)").at_least(0.1),
        ParamSpec::number("neutrophil_percent", "Percentuale di neutrofili segmentati")
            .range(0.0, 100.0),
        ParamSpec::number("bands_percent", "Percentuale di bande (opzionale)")
            .range(0.0, 100.0)
            .default_number(0.0),
    ];

    pub fn execute(params: &AncParams) -> Result<CalculationResult, ToolError> {
        let anc = absolute_neutrophil_count(
            params.wbc_count,
            params.neutrophil_percent,
            params.bands_percent,
        )?;
        let band = classify(anc, ANC_BANDS)?;

        Ok(CalculationResult::new(
            "Conta Assoluta dei Neutrofili (ANC)",
            Measure::quantity("ANC", anc, 0, "cellule/μL"),
            Classification::from_band("Interpretazione", band),
        )
        .detail("Globuli bianchi", format!("{} x10^3/μL", params.wbc_count))
        .detail("Neutrofili segmentati", format!("{}%", params.neutrophil_percent))
        .detail("Bande", format!("{}%", params.bands_percent))
        .note("ANC = WBC × (neutrofili% + bande%) / 100 × 1000")
        .note("Soglie: <500 severa, 500-999 moderata, 1000-1499 lieve"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([ANC_BANDS])
    }
}
