//! Pediatric Trauma Score (PTS).

use serde::Deserialize;

use super::super::common::Tally;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct TraumaParams {
    pub weight_kg: f64,
    pub systolic_bp: u32,
    pub conscious: bool,
    pub open_wound: bool,
    pub fracture: bool,
    /// True when the skin is intact.
    pub cutaneous: bool,
}

pub static PTS_BANDS: &[Band] = &[
    Band::below(0.0, "CRITICO", "Rianimazione immediata - Estremo pericolo"),
    Band::at_most(5.0, "SEVERO", "Trauma team - Stabilizzazione prioritaria"),
    Band::at_most(8.0, "MODERATO", "Valutazione trauma team - Potenziale pericolo"),
    Band::otherwise("MINIMO", "Valutazione standard - Trauma lieve"),
];

pub struct PediatricTraumaScoreTool;

impl PediatricTraumaScoreTool {
    pub const NAME: &'static str = "calculate_pediatric_trauma_score";

    pub const DESCRIPTION: &'static str =
        "Calcola Pediatric Trauma Score (PTS) per valutare la gravità dei traumi pediatrici";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("weight_kg", "Peso in kg").range(0.0, 100.0),
        ParamSpec::integer("systolic_bp", "Pressione arteriosa sistolica in mmHg").range(0.0, 200.0),
        ParamSpec::boolean(
            "conscious",
            "Stato di coscienza: True=sveglio, False=obnubilato/coma",
        ),
        ParamSpec::boolean(
            "open_wound",
            "Ferita aperta/penetrante: True=presente, False=assente",
        ),
        ParamSpec::boolean(
            "fracture",
            "Frattura aperta/multipla: True=presente, False=assente",
        ),
        ParamSpec::boolean("cutaneous", "Cute intatta: True=intatta, False=compromessa"),
    ];

    pub fn execute(params: &TraumaParams) -> Result<CalculationResult, ToolError> {
        let weight = if params.weight_kg > 20.0 {
            ("Peso >20kg", 2)
        } else if params.weight_kg >= 10.0 {
            ("Peso 10-20kg", 1)
        } else {
            ("Peso <10kg", -1)
        };
        let pressure = if params.systolic_bp > 90 {
            ("PA >90mmHg", 2)
        } else if params.systolic_bp >= 50 {
            ("PA 50-90mmHg", 1)
        } else {
            ("PA <50mmHg", -1)
        };

        let tally = Tally::new()
            .add(true, weight.0, weight.1)
            .add(true, pressure.0, pressure.1)
            .either(
                params.conscious,
                ("Paziente sveglio", 2),
                ("Paziente in coma", -1),
            )
            .either(
                params.open_wound,
                ("Ferita maggiore/penetrante", -1),
                ("Nessuna ferita aperta", 2),
            )
            .either(
                params.fracture,
                ("Frattura aperta/multipla", -1),
                ("Nessuna frattura", 2),
            )
            .either(
                params.cutaneous,
                ("Cute intatta", 2),
                ("Perdita sostanza cutanea", -1),
            );

        let band = classify(f64::from(tally.total()), PTS_BANDS)?;
        let result = CalculationResult::new(
            "Pediatric Trauma Score (PTS)",
            Measure::score("Punteggio totale", tally.total()).out_of(12),
            Classification::from_band("Livello di rischio", band),
        );

        Ok(tally
            .itemize(result, "-")
            .note("PTS <8 richiede centro traumatologico pediatrico")
            .note("PTS <6 associato a mortalità >25%"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([PTS_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninjured_child_scores_maximum() {
        let result = PediatricTraumaScoreTool::execute(&TraumaParams {
            weight_kg: 25.0,
            systolic_bp: 110,
            conscious: true,
            open_wound: false,
            fracture: false,
            cutaneous: true,
        })
        .unwrap();
        assert_eq!(result.primary.value, 12.0);
        assert_eq!(result.classification.label, "MINIMO");
    }

    #[test]
    fn test_negative_total_is_critical() {
        let result = PediatricTraumaScoreTool::execute(&TraumaParams {
            weight_kg: 8.0,
            systolic_bp: 40,
            conscious: false,
            open_wound: true,
            fracture: true,
            cutaneous: false,
        })
        .unwrap();
        assert_eq!(result.primary.value, -6.0);
        assert_eq!(result.classification.label, "CRITICO");
        assert!(result.render().contains("- Peso <10kg: -1"));
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(classify(0.0, PTS_BANDS).unwrap().label, "SEVERO");
        assert_eq!(classify(8.0, PTS_BANDS).unwrap().label, "MODERATO");
        assert_eq!(classify(9.0, PTS_BANDS).unwrap().label, "MINIMO");
    }
}
