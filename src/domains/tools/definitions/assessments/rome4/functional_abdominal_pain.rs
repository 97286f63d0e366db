//! Rome IV functional abdominal pain, not otherwise specified.

use serde::Deserialize;

use super::{Checklist, evolving_or_alternatives};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::CalculationResult;
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionalAbdominalPainParams {
    pub abdominal_pain_frequency: u32,
    pub continuous_pain: bool,
    pub meets_ibs_criteria: bool,
    pub meets_dyspepsia_criteria: bool,
    pub meets_abdominal_migraine_criteria: bool,
    pub symptoms_duration_months: u32,
    pub inflammatory_condition: bool,
}

impl FunctionalAbdominalPainParams {
    fn frequent_pain(&self) -> bool {
        self.abdominal_pain_frequency >= 4 || self.continuous_pain
    }

    /// Other functional pain disorders that would take precedence.
    fn competing_disorders(&self) -> Vec<&'static str> {
        [
            (self.meets_ibs_criteria, "sindrome dell'intestino irritabile"),
            (self.meets_dyspepsia_criteria, "dispepsia funzionale"),
            (self.meets_abdominal_migraine_criteria, "emicrania addominale"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }
}

pub struct FunctionalAbdominalPainTool;

impl FunctionalAbdominalPainTool {
    pub const NAME: &'static str = "assess_rome4_functional_abdominal_pain";

    pub const DESCRIPTION: &'static str = "Valuta criteri Rome IV per dolore addominale funzionale pediatrico - non altrimenti specificato";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer(
            "abdominal_pain_frequency",
            "Frequenza del dolore addominale (giorni/settimana)",
        )
        .range(0.0, 7.0),
        ParamSpec::boolean("continuous_pain", "Dolore addominale continuo"),
        ParamSpec::boolean(
            "meets_ibs_criteria",
            "Soddisfa criteri per sindrome intestino irritabile",
        ),
        ParamSpec::boolean(
            "meets_dyspepsia_criteria",
            "Soddisfa criteri per dispepsia funzionale",
        ),
        ParamSpec::boolean(
            "meets_abdominal_migraine_criteria",
            "Soddisfa criteri per emicrania addominale",
        ),
        ParamSpec::integer("symptoms_duration_months", "Durata dei sintomi in mesi").range(0.0, 60.0),
        ParamSpec::boolean(
            "inflammatory_condition",
            "Evidenza di processo infiammatorio, anatomico, metabolico o neoplastico",
        ),
    ];

    pub fn execute(params: &FunctionalAbdominalPainParams) -> Result<CalculationResult, ToolError> {
        let competing = params.competing_disorders();
        let pain_pattern = if params.continuous_pain {
            "Dolore addominale continuo".to_string()
        } else {
            format!(
                "Dolore addominale {} giorni/settimana (≥4)",
                params.abdominal_pain_frequency
            )
        };

        let checklist = Checklist::new()
            .check(
                params.frequent_pain(),
                pain_pattern,
                format!(
                    "Dolore addominale {} giorni/settimana, non continuo (richiesti ≥4)",
                    params.abdominal_pain_frequency
                ),
            )
            .check(
                competing.is_empty(),
                "Criteri per altri disturbi funzionali non soddisfatti",
                format!("Soddisfa criteri per: {}", competing.join(", ")),
            )
            .duration(params.symptoms_duration_months, 2)
            .exclude(
                params.inflammatory_condition,
                "processi infiammatori, anatomici, metabolici o neoplastici",
            );

        let evolving = params.frequent_pain()
            && competing.is_empty()
            && !params.inflammatory_condition
            && params.symptoms_duration_months >= 1;
        let met = checklist.all_met();

        Ok(checklist
            .conclude(
                "Dolore addominale funzionale NAS (Rome IV)",
                "Diagnosi di dolore addominale funzionale non altrimenti specificato secondo Rome IV"
                    .to_string(),
                evolving_or_alternatives(evolving, "dolore addominale funzionale"),
            )
            .note_if(
                !competing.is_empty(),
                "Diagnosticare il disturbo funzionale specifico i cui criteri sono soddisfatti",
            )
            .note_if(
                met,
                "Gestione: educazione, rassicurazione, terapia cognitivo-comportamentale, ipnoterapia",
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

    fn typical() -> FunctionalAbdominalPainParams {
        FunctionalAbdominalPainParams {
            abdominal_pain_frequency: 5,
            continuous_pain: false,
            meets_ibs_criteria: false,
            meets_dyspepsia_criteria: false,
            meets_abdominal_migraine_criteria: false,
            symptoms_duration_months: 3,
            inflammatory_condition: false,
        }
    }

    #[test]
    fn test_frequent_pain_meets_criteria() {
        let result = FunctionalAbdominalPainTool::execute(&typical()).unwrap();
        assert_eq!(result.classification.label, CRITERIA_MET);
    }

    #[test]
    fn test_continuous_pain_replaces_frequency() {
        let params = FunctionalAbdominalPainParams {
            abdominal_pain_frequency: 0,
            continuous_pain: true,
            ..typical()
        };
        let result = FunctionalAbdominalPainTool::execute(&params).unwrap();
        assert_eq!(result.classification.label, CRITERIA_MET);
    }

    #[test]
    fn test_competing_disorder_excludes() {
        let params = FunctionalAbdominalPainParams {
            meets_ibs_criteria: true,
            ..typical()
        };
        let result = FunctionalAbdominalPainTool::execute(&params).unwrap();
        assert_eq!(result.classification.label, CRITERIA_NOT_MET);
        assert!(result.render().contains("Soddisfa criteri per: sindrome dell'intestino irritabile"));
        assert_eq!(
            result.classification.recommendation.as_deref(),
            Some("Considerare diagnosi alternative")
        );
    }

    #[test]
    fn test_one_month_is_evolving() {
        let params = FunctionalAbdominalPainParams {
            symptoms_duration_months: 1,
            ..typical()
        };
        let result = FunctionalAbdominalPainTool::execute(&params).unwrap();
        assert_eq!(
            result.classification.recommendation.as_deref(),
            Some("Possibile dolore addominale funzionale in evoluzione, rivalutare")
        );
    }
}
