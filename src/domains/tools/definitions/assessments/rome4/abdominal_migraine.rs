//! Rome IV abdominal migraine.

use serde::Deserialize;

use super::{Checklist, evolving_or_alternatives};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::CalculationResult;
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociatedSymptom {
    Anorexia,
    Nausea,
    Vomiting,
    Headache,
    Photophobia,
    Pallor,
}

impl AssociatedSymptom {
    fn label(self) -> &'static str {
        match self {
            Self::Anorexia => "anoressia",
            Self::Nausea => "nausea",
            Self::Vomiting => "vomito",
            Self::Headache => "cefalea",
            Self::Photophobia => "fotofobia",
            Self::Pallor => "pallore",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbdominalMigraineParams {
    pub episodes_abdominal_pain: bool,
    pub episodes_duration_hours: u32,
    pub normal_between_episodes: bool,
    pub interferes_activities: bool,
    pub associated_symptoms: Vec<AssociatedSymptom>,
    pub symptoms_duration_months: u32,
    pub episodes_count: u32,
}

impl AbdominalMigraineParams {
    fn distinct_symptoms(&self) -> Vec<AssociatedSymptom> {
        let mut seen = Vec::new();
        for symptom in &self.associated_symptoms {
            if !seen.contains(symptom) {
                seen.push(*symptom);
            }
        }
        seen
    }
}

pub struct AbdominalMigraineTool;

impl AbdominalMigraineTool {
    pub const NAME: &'static str = "assess_rome4_abdominal_migraine";

    pub const DESCRIPTION: &'static str =
        "Valuta criteri Rome IV per emicrania addominale pediatrica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean(
            "episodes_abdominal_pain",
            "Episodi stereotipati di dolore addominale acuto periombelicale",
        ),
        ParamSpec::integer(
            "episodes_duration_hours",
            "Durata tipica degli episodi in ore (1-72)",
        )
        .range(1.0, 72.0),
        ParamSpec::boolean(
            "normal_between_episodes",
            "Ritorno allo stato di salute normale tra gli episodi",
        ),
        ParamSpec::boolean("interferes_activities", "Dolore interferisce con attività quotidiane"),
        ParamSpec::multi_choice(
            "associated_symptoms",
            "Sintomi associati: anoressia, nausea, vomito, mal di testa, fotofobia, pallore",
            &["anorexia", "nausea", "vomiting", "headache", "photophobia", "pallor"],
        ),
        ParamSpec::integer("symptoms_duration_months", "Durata dei sintomi in mesi").range(0.0, 60.0),
        ParamSpec::integer("episodes_count", "Numero di episodi negli ultimi 6 mesi").range(0.0, 100.0),
    ];

    pub fn execute(params: &AbdominalMigraineParams) -> Result<CalculationResult, ToolError> {
        let symptoms = params.distinct_symptoms();
        let symptom_list = symptoms
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ");

        let checklist = Checklist::new()
            .require(
                params.episodes_abdominal_pain,
                "Episodi parossistici di dolore addominale acuto periombelicale",
            )
            .check(
                params.episodes_duration_hours >= 1,
                format!("Episodi della durata di {} ore (≥1 ora)", params.episodes_duration_hours),
                format!("Episodi della durata di {} ore (<1 ora)", params.episodes_duration_hours),
            )
            .require(
                params.normal_between_episodes,
                "Ritorno allo stato di salute abituale tra gli episodi",
            )
            .require(
                params.interferes_activities,
                "Dolore tale da interferire con le attività quotidiane",
            )
            .check(
                symptoms.len() >= 2,
                format!("Almeno 2 sintomi associati ({symptom_list})"),
                format!("Sintomi associati insufficienti: {} (richiesti ≥2)", symptoms.len()),
            )
            .duration(params.symptoms_duration_months, 6)
            .check(
                params.episodes_count >= 2,
                format!("{} episodi negli ultimi 6 mesi (≥2)", params.episodes_count),
                format!("{} episodi negli ultimi 6 mesi (richiesti ≥2)", params.episodes_count),
            );

        let evolving = checklist.unmet_count() <= 2 && params.symptoms_duration_months >= 2;
        let met = checklist.all_met();

        Ok(checklist
            .conclude(
                "Emicrania addominale (Rome IV)",
                "Diagnosi di emicrania addominale secondo Rome IV".to_string(),
                evolving_or_alternatives(evolving, "emicrania addominale"),
            )
            .note_if(
                met,
                "Profilassi da considerare se episodi frequenti o invalidanti (pizotifene, propranololo, ciproeptadina)",
            )
            .note("Escludere cause organiche prima della diagnosi (esami di primo livello, ecografia addominale)"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{CRITERIA_MET, CRITERIA_NOT_MET};
    use super::*;

    fn typical() -> AbdominalMigraineParams {
        AbdominalMigraineParams {
            episodes_abdominal_pain: true,
            episodes_duration_hours: 4,
            normal_between_episodes: true,
            interferes_activities: true,
            associated_symptoms: vec![AssociatedSymptom::Nausea, AssociatedSymptom::Pallor],
            symptoms_duration_months: 8,
            episodes_count: 3,
        }
    }

    #[test]
    fn test_all_criteria_met() {
        let result = AbdominalMigraineTool::execute(&typical()).unwrap();
        assert_eq!(result.classification.label, CRITERIA_MET);
        assert_eq!(result.primary.value, 7.0);
    }

    #[test]
    fn test_repeated_symptom_counts_once() {
        let params = AbdominalMigraineParams {
            associated_symptoms: vec![AssociatedSymptom::Nausea, AssociatedSymptom::Nausea],
            ..typical()
        };
        let result = AbdominalMigraineTool::execute(&params).unwrap();
        assert_eq!(result.classification.label, CRITERIA_NOT_MET);
        assert!(result.render().contains("Sintomi associati insufficienti: 1"));
    }

    #[test]
    fn test_short_history_is_evolving() {
        let params = AbdominalMigraineParams {
            symptoms_duration_months: 3,
            ..typical()
        };
        let result = AbdominalMigraineTool::execute(&params).unwrap();
        assert_eq!(
            result.classification.recommendation.as_deref(),
            Some("Possibile emicrania addominale in evoluzione, rivalutare")
        );
    }
}
