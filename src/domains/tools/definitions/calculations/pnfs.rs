//! Pediatric NAFLD Fibrosis Score.

use serde::Deserialize;

use crate::domains::formulas::labs::pnfs_probability;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct PnfsParams {
    pub alt_iu_l: f64,
    pub alkaline_phosphatase_iu_l: f64,
    pub platelets_k_ul: f64,
    pub ggt_iu_l: f64,
}

pub static PNFS_BANDS: &[Band] = &[
    Band::below(
        30.0,
        "BASSO RISCHIO FIBROSI AVANZATA",
        "Monitoraggio standard, modifiche stile di vita, controllo ogni 6-12 mesi",
    ),
    Band::at_most(
        60.0,
        "RISCHIO INTERMEDIO",
        "Monitoraggio più frequente, elastografia, controllo ogni 3-6 mesi",
    ),
    Band::otherwise(
        "ALTO RISCHIO FIBROSI AVANZATA",
        "Considerare biopsia epatica, valutazione specialistica epatologica",
    ),
];

pub struct PnfsTool;

impl PnfsTool {
    pub const NAME: &'static str = "calculate_pnfs";

    pub const DESCRIPTION: &'static str = "Calcola il Pediatric NAFLD Fibrosis Score (PNFS) per predire il rischio di fibrosi avanzata in steatosi epatica non alcolica pediatrica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("alt_iu_l", "ALT in IU/L").range(5.0, 1000.0),
        ParamSpec::number("alkaline_phosphatase_iu_l", "Fosfatasi alcalina in IU/L")
            .range(50.0, 1500.0),
        ParamSpec::number("platelets_k_ul", "Piastrine in K/μL").range(20.0, 999.0),
        ParamSpec::number("ggt_iu_l", "GGT in IU/L").range(5.0, 1000.0),
    ];

    pub fn execute(params: &PnfsParams) -> Result<CalculationResult, ToolError> {
        let probability = pnfs_probability(
            params.alt_iu_l,
            params.alkaline_phosphatase_iu_l,
            params.platelets_k_ul,
            params.ggt_iu_l,
        )?;
        let band = classify(probability, PNFS_BANDS)?;

        Ok(CalculationResult::new(
            "Pediatric NAFLD Fibrosis Score (PNFS)",
            Measure::quantity("Probabilità di fibrosi avanzata", probability, 1, "%"),
            Classification::from_band("Rischio", band),
        )
        .detail("ALT", format!("{} IU/L", params.alt_iu_l))
        .detail("Fosfatasi alcalina", format!("{} IU/L", params.alkaline_phosphatase_iu_l))
        .detail("Piastrine", format!("{} K/μL", params.platelets_k_ul))
        .detail("GGT", format!("{} IU/L", params.ggt_iu_l))
        .note("Validato in NAFLD pediatrica confermata da biopsia (AUROC 0.74)")
        .note("Non sostituisce la biopsia epatica")
        .note("Fonte: Alkhouri et al., 2014"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([PNFS_BANDS])
    }
}
