//! Rome IV cyclic vomiting syndrome.

use serde::Deserialize;

use super::{Checklist, evolving_or_alternatives};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::CalculationResult;
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct CyclicVomitingParams {
    pub stereotypical_episodes: bool,
    pub episodes_duration_hours: u32,
    pub episodes_count: u32,
    pub return_to_baseline: bool,
    pub symptoms_duration_months: u32,
    pub vomiting_frequency: u32,
    pub other_gi_conditions: bool,
}

pub struct CyclicVomitingTool;

impl CyclicVomitingTool {
    pub const NAME: &'static str = "assess_rome4_cyclic_vomiting";

    pub const DESCRIPTION: &'static str =
        "Valuta criteri Rome IV per sindrome del vomito ciclico pediatrica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean("stereotypical_episodes", "Episodi stereotipati di vomito intenso"),
        ParamSpec::integer(
            "episodes_duration_hours",
            "Durata tipica degli episodi in ore (1-168)",
        )
        .range(1.0, 168.0),
        ParamSpec::integer("episodes_count", "Numero di episodi negli ultimi 12 mesi")
            .range(0.0, 100.0),
        ParamSpec::boolean(
            "return_to_baseline",
            "Ritorno allo stato di salute normale tra gli episodi",
        ),
        ParamSpec::integer("symptoms_duration_months", "Durata dei sintomi in mesi").range(0.0, 60.0),
        ParamSpec::integer(
            "vomiting_frequency",
            "Frequenza del vomito durante gli episodi (numero episodi/ora)",
        )
        .range(0.0, 100.0),
        ParamSpec::boolean(
            "other_gi_conditions",
            "Presenza di altre condizioni gastrointestinali che spiegano i sintomi",
        ),
    ];

    pub fn execute(params: &CyclicVomitingParams) -> Result<CalculationResult, ToolError> {
        let checklist = Checklist::new()
            .require(
                params.stereotypical_episodes,
                "Episodi stereotipati di nausea e vomito intensi",
            )
            .check(
                params.episodes_duration_hours >= 1,
                format!("Episodi della durata di {} ore (≥1 ora)", params.episodes_duration_hours),
                format!("Episodi della durata di {} ore (<1 ora)", params.episodes_duration_hours),
            )
            .check(
                params.episodes_count >= 2,
                format!("{} episodi in 12 mesi (≥2)", params.episodes_count),
                format!("{} episodi in 12 mesi (richiesti ≥2)", params.episodes_count),
            )
            .require(
                params.return_to_baseline,
                "Ritorno allo stato di salute di base tra gli episodi",
            )
            .duration(params.symptoms_duration_months, 6)
            .check(
                params.vomiting_frequency >= 4,
                format!("Vomito {} volte/ora durante gli episodi (≥4)", params.vomiting_frequency),
                format!(
                    "Vomito {} volte/ora durante gli episodi (richiesto ≥4)",
                    params.vomiting_frequency
                ),
            )
            .exclude(
                params.other_gi_conditions,
                "altre condizioni gastrointestinali che spiegano i sintomi",
            );

        let evolving = checklist.unmet_count() <= 2 && params.symptoms_duration_months >= 2;
        let met = checklist.all_met();

        Ok(checklist
            .conclude(
                "Sindrome del vomito ciclico (Rome IV)",
                "Diagnosi di sindrome del vomito ciclico secondo Rome IV".to_string(),
                evolving_or_alternatives(evolving, "sindrome del vomito ciclico"),
            )
            .note_if(
                met,
                "Fase acuta: idratazione EV con glucosio, antiemetici (ondansetron), ambiente buio e silenzioso",
            )
            .note_if(
                met,
                "Profilassi se episodi frequenti o gravi: ciproeptadina (<5 anni), amitriptilina o propranololo (≥5 anni)",
            )
            .note("Escludere cause chirurgiche, metaboliche, neurologiche e renali durante il primo episodio"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{CRITERIA_MET, CRITERIA_NOT_MET};
    use super::*;

    fn typical() -> CyclicVomitingParams {
        CyclicVomitingParams {
            stereotypical_episodes: true,
            episodes_duration_hours: 24,
            episodes_count: 4,
            return_to_baseline: true,
            symptoms_duration_months: 9,
            vomiting_frequency: 6,
            other_gi_conditions: false,
        }
    }

    #[test]
    fn test_typical_presentation() {
        let result = CyclicVomitingTool::execute(&typical()).unwrap();
        assert_eq!(result.classification.label, CRITERIA_MET);
        assert_eq!(result.primary.value, 7.0);
    }

    #[test]
    fn test_infrequent_vomiting_not_met() {
        let params = CyclicVomitingParams {
            vomiting_frequency: 3,
            ..typical()
        };
        let result = CyclicVomitingTool::execute(&params).unwrap();
        assert_eq!(result.classification.label, CRITERIA_NOT_MET);
        assert_eq!(
            result.classification.recommendation.as_deref(),
            Some("Possibile sindrome del vomito ciclico in evoluzione, rivalutare")
        );
    }

    #[test]
    fn test_many_unmet_points_elsewhere() {
        let params = CyclicVomitingParams {
            stereotypical_episodes: false,
            return_to_baseline: false,
            other_gi_conditions: true,
            ..typical()
        };
        let result = CyclicVomitingTool::execute(&params).unwrap();
        assert_eq!(
            result.classification.recommendation.as_deref(),
            Some("Considerare diagnosi alternative")
        );
    }
}
