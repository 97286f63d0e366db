//! EULAR/PRINTO/PRES criteria for Henoch-Schönlein purpura.

use serde::Deserialize;

use super::super::common::{count_true, list_or};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification, Measure, si_no};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct HspParams {
    pub palpable_purpura: bool,
    pub abdominal_pain: bool,
    pub histopathology: bool,
    pub arthritis_arthralgia: bool,
    pub renal_involvement: bool,
}

pub struct HspCriteriaTool;

impl HspCriteriaTool {
    pub const NAME: &'static str = "calculate_hsp_criteria";

    pub const DESCRIPTION: &'static str = "Valuta i criteri EULAR/PRINTO/PRES per la diagnosi di Porpora di Henoch-Schönlein (HSP)";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean("palpable_purpura", "Porpora palpabile (criterio obbligatorio)"),
        ParamSpec::boolean("abdominal_pain", "Dolore addominale"),
        ParamSpec::boolean("histopathology", "Depositi di IgA alla biopsia"),
        ParamSpec::boolean("arthritis_arthralgia", "Artrite o artralgia"),
        ParamSpec::boolean(
            "renal_involvement",
            "Coinvolgimento renale (ematuria e/o proteinuria)",
        ),
    ];

    pub fn execute(params: &HspParams) -> Result<CalculationResult, ToolError> {
        let additional = [
            (params.abdominal_pain, "Dolore addominale"),
            (params.histopathology, "Depositi di IgA alla biopsia"),
            (params.arthritis_arthralgia, "Artrite/artralgia"),
            (params.renal_involvement, "Coinvolgimento renale"),
        ];
        let count = count_true(&additional.map(|(present, _)| present));
        let present: Vec<&str> = additional
            .iter()
            .filter(|(p, _)| *p)
            .map(|(_, label)| *label)
            .collect();

        let classification = if params.palpable_purpura && count >= 1 {
            Classification::new("Diagnosi", "CRITERI HSP SODDISFATTI").recommending(
                "Diagnosi di Porpora di Henoch-Schönlein (HSP) confermata.",
            )
        } else if !params.palpable_purpura {
            Classification::new("Diagnosi", "CRITERI HSP NON SODDISFATTI").recommending(
                "Criterio obbligatorio (porpora palpabile) non presente. Considerare diagnosi alternative.",
            )
        } else {
            Classification::new("Diagnosi", "CRITERI HSP NON SODDISFATTI").recommending(
                "Necessario almeno un criterio aggiuntivo oltre alla porpora palpabile.",
            )
        };

        Ok(CalculationResult::new(
            "Criteri EULAR/PRINTO/PRES per Porpora di Henoch-Schönlein (HSP)",
            Measure::score("Criteri aggiuntivi presenti", count).out_of(4),
            classification,
        )
        .detail("Porpora palpabile", si_no(params.palpable_purpura))
        .detail("Criteri aggiuntivi", list_or(&present, "Nessuno"))
        .note("Monitoraggio renale per 6 mesi è raccomandato")
        .note("Fonte: Criteri EULAR/PRINTO/PRES 2010"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(palpable_purpura: bool, abdominal_pain: bool) -> HspParams {
        HspParams {
            palpable_purpura,
            abdominal_pain,
            histopathology: false,
            arthritis_arthralgia: false,
            renal_involvement: false,
        }
    }

    #[test]
    fn test_purpura_plus_one_criterion() {
        let result = HspCriteriaTool::execute(&params(true, true)).unwrap();
        assert_eq!(result.classification.label, "CRITERI HSP SODDISFATTI");
    }

    #[test]
    fn test_recommendation_depends_on_purpura() {
        let without = HspCriteriaTool::execute(&params(false, true)).unwrap();
        let alone = HspCriteriaTool::execute(&params(true, false)).unwrap();
        assert_eq!(without.classification.label, "CRITERI HSP NON SODDISFATTI");
        assert_eq!(alone.classification.label, "CRITERI HSP NON SODDISFATTI");
        assert_ne!(
            without.classification.recommendation,
            alone.classification.recommendation
        );
    }
}
