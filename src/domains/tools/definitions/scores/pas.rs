//! PAS (Pediatric Appendicitis Score).

use serde::Deserialize;

use super::super::common::Tally;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct PasParams {
    pub fever: bool,
    pub anorexia: bool,
    pub nausea_vomiting: bool,
    pub cough_percussion_hopping: bool,
    pub rlq_tenderness: bool,
    pub pain_migration: bool,
    pub leukocytosis: bool,
    pub neutrophilia: bool,
}

pub static PAS_BANDS: &[Band] = &[
    Band::at_most(
        2.0,
        "BASSA (2%)",
        "Appendicite improbabile - Considerare diagnosi alternative",
    ),
    Band::at_most(
        5.0,
        "INTERMEDIA (15-25%)",
        "Osservazione clinica - Rivalutazione in 6-12 ore",
    ),
    Band::at_most(
        7.0,
        "ALTA (70-80%)",
        "Forte sospetto appendicite - Consultazione chirurgica",
    ),
    Band::otherwise(
        "MOLTO ALTA (95%+)",
        "Appendicite molto probabile - Preparazione per intervento",
    ),
];

pub struct PasTool;

impl PasTool {
    pub const NAME: &'static str = "calculate_pas";

    pub const DESCRIPTION: &'static str =
        "Calcola il PAS (Pediatric Appendicitis Score) per valutare la probabilità di appendicite acuta";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean("fever", "Febbre ≥38°C (1 punto se presente)"),
        ParamSpec::boolean("anorexia", "Anoressia (1 punto se presente)"),
        ParamSpec::boolean("nausea_vomiting", "Nausea o vomito (1 punto se presente)"),
        ParamSpec::boolean(
            "cough_percussion_hopping",
            "Dolore con colpo di tosse, percussione o saltellamento (2 punti se presente)",
        ),
        ParamSpec::boolean(
            "rlq_tenderness",
            "Dolorabilità in fossa iliaca destra (2 punti se presente)",
        ),
        ParamSpec::boolean(
            "pain_migration",
            "Migrazione del dolore da regione periombelicale a fossa iliaca destra (1 punto se presente)",
        ),
        ParamSpec::boolean("leukocytosis", "Leucocitosi >10.000/μL (1 punto se presente)"),
        ParamSpec::boolean("neutrophilia", "Neutrofilia >7.500/μL (1 punto se presente)"),
    ];

    pub fn execute(params: &PasParams) -> Result<CalculationResult, ToolError> {
        let tally = Tally::new()
            .add(params.fever, "Febbre ≥38°C", 1)
            .add(params.anorexia, "Anoressia", 1)
            .add(params.nausea_vomiting, "Nausea/vomito", 1)
            .add(
                params.cough_percussion_hopping,
                "Dolore con tosse/percussione/saltellamento",
                2,
            )
            .add(params.rlq_tenderness, "Dolorabilità fossa iliaca destra", 2)
            .add(params.pain_migration, "Migrazione del dolore", 1)
            .add(params.leukocytosis, "Leucocitosi >10.000/μL", 1)
            .add(params.neutrophilia, "Neutrofilia >7.500/μL", 1);

        let band = classify(f64::from(tally.total()), PAS_BANDS)?;
        let result = CalculationResult::new(
            "PAS (Pediatric Appendicitis Score)",
            Measure::score("Punteggio totale", tally.total()).out_of(10),
            Classification::from_band("Probabilità appendicite", band),
        );

        Ok(tally
            .itemize(result, "Nessun elemento presente")
            .note("Score 0-2: Appendicite improbabile (2%)")
            .note("Score 3-5: Probabilità intermedia (15-25%)")
            .note("Score 6-7: Alta probabilità (70-80%)")
            .note("Score 8-10: Appendicite molto probabile (95%+)"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([PAS_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none() -> PasParams {
        PasParams {
            fever: false,
            anorexia: false,
            nausea_vomiting: false,
            cough_percussion_hopping: false,
            rlq_tenderness: false,
            pain_migration: false,
            leukocytosis: false,
            neutrophilia: false,
        }
    }

    #[test]
    fn test_pas_weights() {
        let p = PasParams {
            cough_percussion_hopping: true,
            rlq_tenderness: true,
            fever: true,
            ..none()
        };
        let result = PasTool::execute(&p).unwrap();
        assert_eq!(result.primary.value, 5.0);
        assert_eq!(result.classification.label, "INTERMEDIA (15-25%)");
        assert!(result.render().contains("- Dolorabilità fossa iliaca destra: +2"));
    }

    #[test]
    fn test_pas_all_present() {
        let p = PasParams {
            fever: true,
            anorexia: true,
            nausea_vomiting: true,
            cough_percussion_hopping: true,
            rlq_tenderness: true,
            pain_migration: true,
            leukocytosis: true,
            neutrophilia: true,
        };
        let result = PasTool::execute(&p).unwrap();
        assert_eq!(result.primary.value, 10.0);
        assert_eq!(result.classification.label, "MOLTO ALTA (95%+)");
    }

    #[test]
    fn test_pas_nothing_present() {
        let text = PasTool::execute(&none()).unwrap().render();
        assert!(text.contains("Nessun elemento presente"));
    }
}
