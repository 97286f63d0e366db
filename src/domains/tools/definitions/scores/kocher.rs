//! Kocher criteria for septic arthritis of the hip.

use serde::Deserialize;

use super::super::common::Tally;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct KocherParams {
    pub fever: bool,
    /// True when the child cannot or will not bear weight.
    pub weight_bearing: bool,
    pub esr_elevated: bool,
    pub wbc_elevated: bool,
}

pub static KOCHER_BANDS: &[Band] = &[
    Band::at_most(
        0.0,
        "<0.2%",
        "Artrite settica estremamente improbabile. Considerare altre diagnosi.",
    ),
    Band::at_most(
        1.0,
        "3%",
        "Bassa probabilità. Considerare osservazione o ulteriori indagini.",
    ),
    Band::at_most(
        2.0,
        "40%",
        "Probabilità intermedia. Considerare aspirazione articolare.",
    ),
    Band::at_most(
        3.0,
        "93%",
        "Alta probabilità. Aspirazione articolare raccomandata.",
    ),
    Band::otherwise(
        "99%",
        "Probabilità molto alta. Aspirazione articolare e intervento fortemente raccomandati.",
    ),
];

pub struct KocherCriteriaTool;

impl KocherCriteriaTool {
    pub const NAME: &'static str = "calculate_kocher_criteria";

    pub const DESCRIPTION: &'static str = "Calcola i Kocher Criteria per la diagnosi di artrite settica dell'anca in età pediatrica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean("fever", "Febbre >38.5°C"),
        ParamSpec::boolean("weight_bearing", "Incapacità/rifiuto di carico sull'arto interessato"),
        ParamSpec::boolean("esr_elevated", "VES >40 mm/h"),
        ParamSpec::boolean("wbc_elevated", "Leucociti >12,000/μL"),
    ];

    pub fn execute(params: &KocherParams) -> Result<CalculationResult, ToolError> {
        let tally = Tally::new()
            .add(params.fever, "Febbre >38.5°C", 1)
            .add(params.weight_bearing, "Incapacità/rifiuto di carico sull'arto", 1)
            .add(params.esr_elevated, "VES >40 mm/h", 1)
            .add(params.wbc_elevated, "Leucociti >12,000/μL", 1);

        let band = classify(f64::from(tally.total()), KOCHER_BANDS)?;
        let result = CalculationResult::new(
            "Kocher Criteria per Artrite Settica dell'Anca",
            Measure::score("Criteri positivi", tally.total()).out_of(4),
            Classification::from_band("Probabilità di artrite settica", band),
        );

        Ok(tally
            .itemize(result, "Nessun criterio presente")
            .note("La PCR elevata (>2.0 mg/dL) è stata aggiunta successivamente come quinto criterio")
            .note("L'aspirazione articolare rimane il gold standard diagnostico"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([KOCHER_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_per_count() {
        let probabilities: Vec<_> = (0..=4)
            .map(|n| classify(f64::from(n), KOCHER_BANDS).unwrap().label)
            .collect();
        assert_eq!(probabilities, vec!["<0.2%", "3%", "40%", "93%", "99%"]);
    }

    #[test]
    fn test_three_criteria() {
        let result = KocherCriteriaTool::execute(&KocherParams {
            fever: true,
            weight_bearing: true,
            esr_elevated: true,
            wbc_elevated: false,
        })
        .unwrap();
        assert_eq!(result.classification.label, "93%");
    }
}
