//! Rome IV functional nausea and functional vomiting.

use serde::Deserialize;

use super::{Checklist, evolving_or_alternatives};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification, si_no};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionalNauseaVomitingParams {
    pub bothersome_nausea: bool,
    pub weekly_vomiting_episodes: u32,
    pub meal_related: bool,
    pub induced_vomiting: bool,
    pub meets_eating_disorder_criteria: bool,
    pub meets_rumination_criteria: bool,
    pub meets_cyclic_vomiting_criteria: bool,
    pub symptoms_duration_months: u32,
    pub organic_disease: bool,
}

impl FunctionalNauseaVomitingParams {
    fn has_symptoms(&self) -> bool {
        self.bothersome_nausea || self.weekly_vomiting_episodes > 0
    }

    /// Conditions that rule the diagnosis out when present.
    fn exclusions(&self) -> Vec<&'static str> {
        [
            (self.meets_eating_disorder_criteria, "disturbo alimentare"),
            (self.meets_rumination_criteria, "sindrome di ruminazione"),
            (self.meets_cyclic_vomiting_criteria, "sindrome del vomito ciclico"),
            (self.induced_vomiting, "vomito autoindotto"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }

    fn subtype(&self) -> &'static str {
        if self.weekly_vomiting_episodes >= 1 {
            "Vomito funzionale"
        } else if self.bothersome_nausea {
            "Nausea funzionale"
        } else {
            "Non classificabile"
        }
    }
}

pub struct FunctionalNauseaVomitingTool;

impl FunctionalNauseaVomitingTool {
    pub const NAME: &'static str = "assess_rome4_functional_nausea_vomiting";

    pub const DESCRIPTION: &'static str =
        "Valuta criteri Rome IV per nausea e vomito funzionali pediatrici";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean("bothersome_nausea", "Nausea fastidiosa come sintomo predominante"),
        ParamSpec::integer("weekly_vomiting_episodes", "Episodi di vomito settimanali")
            .range(0.0, 50.0),
        ParamSpec::boolean("meal_related", "Sintomi regolarmente associati ai pasti"),
        ParamSpec::boolean("induced_vomiting", "Vomito autoindotto"),
        ParamSpec::boolean(
            "meets_eating_disorder_criteria",
            "Soddisfa criteri per disturbo alimentare",
        ),
        ParamSpec::boolean(
            "meets_rumination_criteria",
            "Soddisfa criteri per sindrome di ruminazione",
        ),
        ParamSpec::boolean(
            "meets_cyclic_vomiting_criteria",
            "Soddisfa criteri per sindrome del vomito ciclico",
        ),
        ParamSpec::integer("symptoms_duration_months", "Durata dei sintomi in mesi").range(0.0, 60.0),
        ParamSpec::boolean(
            "organic_disease",
            "Evidenza di malattia organica che spiega i sintomi",
        ),
    ];

    pub fn execute(
        params: &FunctionalNauseaVomitingParams,
    ) -> Result<CalculationResult, ToolError> {
        let exclusions = params.exclusions();
        let symptom_text = match (params.bothersome_nausea, params.weekly_vomiting_episodes) {
            (true, 0) => "Nausea fastidiosa predominante".to_string(),
            (true, n) => format!("Nausea fastidiosa e {n} episodi di vomito/settimana"),
            (false, n) => format!("{n} episodi di vomito/settimana"),
        };

        let checklist = Checklist::new()
            .check(
                params.has_symptoms(),
                symptom_text,
                "Assenza di nausea fastidiosa e di vomito",
            )
            .check(
                exclusions.is_empty(),
                "Nessun disturbo che spieghi meglio i sintomi",
                format!("Presenza di: {}", exclusions.join(", ")),
            )
            .duration(params.symptoms_duration_months, 2)
            .exclude(params.organic_disease, "malattia organica che spiega i sintomi");

        let evolving = params.has_symptoms()
            && exclusions.is_empty()
            && !params.organic_disease
            && params.symptoms_duration_months >= 1;
        let met = checklist.all_met();
        let subtype = if met {
            params.subtype()
        } else {
            "Non classificabile"
        };

        Ok(checklist
            .conclude(
                "Nausea e vomito funzionali (Rome IV)",
                format!("Diagnosi di {} secondo Rome IV", subtype.to_lowercase()),
                evolving_or_alternatives(evolving, "nausea/vomito funzionale"),
            )
            .secondary(Classification::new("Sottotipo", subtype))
            .detail("Correlazione con i pasti", si_no(params.meal_related))
            .note_if(
                met,
                "Gestione: identificare fattori scatenanti, supporto psicologico; ciproeptadina o amitriptilina nei casi refrattari",
            )
            .note("Escludere gravidanza negli adolescenti e cause neurologiche (ipertensione endocranica)"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{CRITERIA_MET, CRITERIA_NOT_MET};
    use super::*;

    fn params(nausea: bool, vomiting: u32) -> FunctionalNauseaVomitingParams {
        FunctionalNauseaVomitingParams {
            bothersome_nausea: nausea,
            weekly_vomiting_episodes: vomiting,
            meal_related: false,
            induced_vomiting: false,
            meets_eating_disorder_criteria: false,
            meets_rumination_criteria: false,
            meets_cyclic_vomiting_criteria: false,
            symptoms_duration_months: 3,
            organic_disease: false,
        }
    }

    #[test]
    fn test_nausea_only_subtype() {
        let result = FunctionalNauseaVomitingTool::execute(&params(true, 0)).unwrap();
        assert_eq!(result.classification.label, CRITERIA_MET);
        assert_eq!(result.secondary[0].label, "Nausea funzionale");
        assert_eq!(
            result.classification.recommendation.as_deref(),
            Some("Diagnosi di nausea funzionale secondo Rome IV")
        );
    }

    #[test]
    fn test_vomiting_subtype() {
        let result = FunctionalNauseaVomitingTool::execute(&params(false, 2)).unwrap();
        assert_eq!(result.secondary[0].label, "Vomito funzionale");
    }

    #[test]
    fn test_rumination_excludes() {
        let p = FunctionalNauseaVomitingParams {
            meets_rumination_criteria: true,
            ..params(true, 1)
        };
        let result = FunctionalNauseaVomitingTool::execute(&p).unwrap();
        assert_eq!(result.classification.label, CRITERIA_NOT_MET);
        assert!(result.render().contains("Presenza di: sindrome di ruminazione"));
        assert_eq!(result.primary.scale_max, Some(4.0));
    }
}
