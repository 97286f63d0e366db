//! Rome IV rumination syndrome.

use serde::Deserialize;

use super::{Checklist, evolving_or_alternatives};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::CalculationResult;
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct RuminationParams {
    pub repeated_regurgitation: bool,
    pub regurgitation_not_preceded_by_retching: bool,
    pub regurgitation_within_30min_after_meal: bool,
    pub regurgitation_not_improved_with_acid_suppression: bool,
    pub symptoms_duration_months: u32,
    pub symptoms_frequency_weekly: u32,
    pub organic_disease: bool,
}

pub struct RuminationSyndromeTool;

impl RuminationSyndromeTool {
    pub const NAME: &'static str = "assess_rome4_rumination_syndrome";

    pub const DESCRIPTION: &'static str =
        "Valuta criteri Rome IV per sindrome di ruminazione pediatrica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean(
            "repeated_regurgitation",
            "Rigurgito ripetuto e senza sforzo di cibo parzialmente digerito",
        ),
        ParamSpec::boolean(
            "regurgitation_not_preceded_by_retching",
            "Rigurgito non preceduto da nausea o conati",
        ),
        ParamSpec::boolean(
            "regurgitation_within_30min_after_meal",
            "Inizio entro 30 minuti dal pasto",
        ),
        ParamSpec::boolean(
            "regurgitation_not_improved_with_acid_suppression",
            "Non migliora con terapie standard per reflusso",
        ),
        ParamSpec::integer("symptoms_duration_months", "Durata dei sintomi in mesi").range(0.0, 60.0),
        ParamSpec::integer(
            "symptoms_frequency_weekly",
            "Frequenza dei sintomi (giorni/settimana)",
        )
        .range(0.0, 7.0),
        ParamSpec::boolean(
            "organic_disease",
            "Evidenza di malattia organica che spiega i sintomi",
        ),
    ];

    pub fn execute(params: &RuminationParams) -> Result<CalculationResult, ToolError> {
        let frequency = params.symptoms_frequency_weekly;

        let checklist = Checklist::new()
            .require(
                params.repeated_regurgitation,
                "Rigurgito ripetuto e senza sforzo di cibo parzialmente digerito",
            )
            .require(
                params.regurgitation_not_preceded_by_retching,
                "Rigurgito non preceduto da conati",
            )
            .require(
                params.regurgitation_within_30min_after_meal,
                "Esordio entro 30 minuti dal pasto",
            )
            .require(
                params.regurgitation_not_improved_with_acid_suppression,
                "Nessun miglioramento con terapia antireflusso",
            )
            .check(
                frequency >= 2,
                format!("Sintomi {frequency} giorni/settimana (≥2)"),
                format!("Sintomi {frequency} giorni/settimana (richiesti ≥2)"),
            )
            .duration(params.symptoms_duration_months, 2)
            .exclude(params.organic_disease, "malattia organica che spiega i sintomi");

        let evolving = params.repeated_regurgitation
            && !params.organic_disease
            && params.symptoms_duration_months >= 1;
        let met = checklist.all_met();

        Ok(checklist
            .conclude(
                "Sindrome di ruminazione (Rome IV)",
                "Diagnosi di sindrome di ruminazione secondo Rome IV".to_string(),
                evolving_or_alternatives(evolving, "sindrome di ruminazione"),
            )
            .note_if(
                met,
                "Trattamento di prima linea: respirazione diaframmatica dopo i pasti, terapia comportamentale",
            )
            .note_if(
                met,
                "Terapia antiacida non indicata in assenza di esofagite documentata",
            ))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{CRITERIA_MET, CRITERIA_NOT_MET};
    use super::*;

    fn typical() -> RuminationParams {
        RuminationParams {
            repeated_regurgitation: true,
            regurgitation_not_preceded_by_retching: true,
            regurgitation_within_30min_after_meal: true,
            regurgitation_not_improved_with_acid_suppression: true,
            symptoms_duration_months: 3,
            symptoms_frequency_weekly: 5,
            organic_disease: false,
        }
    }

    #[test]
    fn test_typical_rumination() {
        let result = RuminationSyndromeTool::execute(&typical()).unwrap();
        assert_eq!(result.classification.label, CRITERIA_MET);
        assert_eq!(result.notes.len(), 2);
    }

    #[test]
    fn test_organic_disease_excludes() {
        let params = RuminationParams {
            organic_disease: true,
            ..typical()
        };
        let result = RuminationSyndromeTool::execute(&params).unwrap();
        assert_eq!(result.classification.label, CRITERIA_NOT_MET);
        assert_eq!(
            result.classification.recommendation.as_deref(),
            Some("Considerare diagnosi alternative")
        );
    }
}
