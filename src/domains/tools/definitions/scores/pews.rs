//! PEWS (Pediatric Early Warning Score), Italian validated version.

use serde::Deserialize;

use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

// ============================================================================
// Tool Parameters
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct PewsParams {
    pub behavior: u32,
    pub cardiovascular: u32,
    pub respiratory: u32,
    /// Only used to frame vital-sign interpretation; does not change the score.
    pub age_months: u32,
    #[serde(default)]
    pub nebulizer_use: u32,
    #[serde(default)]
    pub persistent_vomiting: u32,
}

// ============================================================================
// Classification
// ============================================================================

pub static PEWS_BANDS: &[Band] = &[
    Band::at_most(2.0, "BASSO", "Monitoraggio standard ogni 4-6 ore"),
    Band::at_most(
        4.0,
        "MODERATO",
        "Aumentare frequenza monitoraggio ogni 2 ore - Consulenza medica",
    ),
    Band::at_most(
        6.0,
        "ALTO",
        "Considerare terapia intensiva - Monitoraggio continuo - Consulenza medica urgente",
    ),
    Band::otherwise(
        "CRITICO",
        "Intervento immediato - Contattare rianimazione/MET team",
    ),
];

/// Published scale maximum, shown as the `/13` denominator.
///
/// Not an attainable total: the item maxima (3 + 3 + 3 + 2 + 1) reach 12.
pub const PEWS_MAX: u32 = 13;

/// Highest total the items can actually produce.
pub const PEWS_REACHABLE_MAX: u32 = 12;

// ============================================================================
// Tool Definition
// ============================================================================

pub struct PewsTool;

impl PewsTool {
    pub const NAME: &'static str = "calculate_pews";

    pub const DESCRIPTION: &'static str = "Calcola il PEWS (Pediatric Early Warning Score) versione italiana validata per identificare bambini a rischio di deterioramento clinico";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer(
            "behavior",
            "Comportamento: 0=Gioca/appropriato, 1=Dorme, 2=Irritabile/Preoccupazione genitori, 3=Letargico/confuso/Ridotta risposta al dolore",
        )
        .range(0.0, 3.0),
        ParamSpec::integer(
            "cardiovascular",
            "Apparato cardiovascolare: 0=Roseo/refill 1-2sec, 1=Pallido/refill 3sec, 2=Grigio/refill 4sec/tachicardia +20bpm, 3=Grigio marezzato/refill ≥5sec/tachicardia +30bpm/BRADICARDIA",
        )
        .range(0.0, 3.0),
        ParamSpec::integer(
            "respiratory",
            "Apparato respiratorio: 0=Parametri normali/no rientramenti, 1=Lievi alterazioni/rientramenti intercostali, 2=Moderate alterazioni/rientramenti sottosternali, 3=Gravi alterazioni/rientramenti globali",
        )
        .range(0.0, 3.0),
        ParamSpec::integer("age_months", "Età in mesi per interpretazione parametri vitali")
            .range(0.0, 216.0),
        ParamSpec::integer(
            "nebulizer_use",
            "Uso di nebulizzatore: 0=Nessuno, 1=Intermittente, 2=Continuo o ogni 15 minuti",
        )
        .range(0.0, 2.0)
        .default_number(0.0),
        ParamSpec::integer("persistent_vomiting", "Vomito persistente dopo chirurgia: 0=No, 1=Sì")
            .range(0.0, 1.0)
            .default_number(0.0),
    ];

    pub fn execute(params: &PewsParams) -> Result<CalculationResult, ToolError> {
        let total = params.behavior
            + params.cardiovascular
            + params.respiratory
            + params.nebulizer_use
            + params.persistent_vomiting;
        let band = classify(f64::from(total), PEWS_BANDS)?;

        Ok(CalculationResult::new(
            "PEWS (Pediatric Early Warning Score)",
            Measure::score("Punteggio totale", total).out_of(PEWS_MAX),
            Classification::from_band("Livello di rischio", band),
        )
        .detail("Comportamento", format!("{}/3", params.behavior))
        .detail("Cardiovascolare", format!("{}/3", params.cardiovascular))
        .detail("Respiratorio", format!("{}/3", params.respiratory))
        .detail("Uso nebulizzatore", format!("{}/2", params.nebulizer_use))
        .detail("Vomito persistente", format!("{}/1", params.persistent_vomiting))
        .note("Score 0-2: Monitoraggio di routine")
        .note("Score 3-4: Aumentare sorveglianza")
        .note("Score 5-6: Considerare terapia intensiva")
        .note("Score ≥7: Intervento immediato"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([PEWS_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(behavior: u32, cardiovascular: u32, respiratory: u32) -> PewsParams {
        PewsParams {
            behavior,
            cardiovascular,
            respiratory,
            age_months: 24,
            nebulizer_use: 0,
            persistent_vomiting: 0,
        }
    }

    #[test]
    fn test_pews_high_risk() {
        let result = PewsTool::execute(&params(2, 1, 2)).unwrap();
        assert_eq!(result.primary.value, 5.0);
        assert_eq!(result.classification.label, "ALTO");
        assert!(result.render().contains("Punteggio totale: 5/13"));
    }

    #[test]
    fn test_pews_optional_items_add_up() {
        let mut p = params(3, 3, 3);
        p.nebulizer_use = 2;
        p.persistent_vomiting = 1;
        let result = PewsTool::execute(&p).unwrap();
        assert_eq!(result.primary.value, f64::from(PEWS_REACHABLE_MAX));
        assert_eq!(result.classification.label, "CRITICO");
        assert!(result.render().contains("Punteggio totale: 12/13"));
    }

    #[test]
    fn test_pews_bands_cover_scale() {
        let labels: Vec<_> = (0..=PEWS_MAX)
            .map(|s| classify(f64::from(s), PEWS_BANDS).unwrap().label)
            .collect();
        assert_eq!(&labels[..3], &["BASSO"; 3]);
        assert_eq!(labels[4], "MODERATO");
        assert_eq!(labels[6], "ALTO");
        assert_eq!(labels[7], "CRITICO");
    }
}
