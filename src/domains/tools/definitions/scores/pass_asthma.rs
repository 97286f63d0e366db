//! Pediatric Asthma Severity Score (PASS).

use serde::Deserialize;

use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct PassAsthmaParams {
    pub wheezing: u32,
    pub work_of_breathing: u32,
    pub prolonged_expiration: u32,
}

pub static PASS_BANDS: &[Band] = &[
    Band::at_most(
        2.0,
        "LIEVE",
        "Considerare dimissione con follow-up, SABA al bisogno",
    ),
    Band::at_most(
        4.0,
        "MODERATA",
        "Continuare trattamento in PS, rivalutare dopo 1-2 ore",
    ),
    Band::otherwise(
        "SEVERA",
        "Trattamento intensivo, possibile ricovero in terapia intensiva",
    ),
];

pub struct PassAsthmaTool;

impl PassAsthmaTool {
    pub const NAME: &'static str = "calculate_pass_asthma";

    pub const DESCRIPTION: &'static str = "Calcola il Pediatric Asthma Severity Score (PASS) per valutare la gravità di un'esacerbazione asmatica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer("wheezing", "Wheezing: 0=assente, 1=fine/localizzato, 2=diffuso")
            .range(0.0, 2.0),
        ParamSpec::integer(
            "work_of_breathing",
            "Lavoro respiratorio: 0=normale, 1=aumentato, 2=massimale",
        )
        .range(0.0, 2.0),
        ParamSpec::integer(
            "prolonged_expiration",
            "Espirazione prolungata: 0=assente, 1=moderata, 2=marcata",
        )
        .range(0.0, 2.0),
    ];

    pub fn execute(params: &PassAsthmaParams) -> Result<CalculationResult, ToolError> {
        let total = params.wheezing + params.work_of_breathing + params.prolonged_expiration;
        let band = classify(f64::from(total), PASS_BANDS)?;

        Ok(CalculationResult::new(
            "Pediatric Asthma Severity Score (PASS)",
            Measure::score("Punteggio totale", total).out_of(6),
            Classification::from_band("Severità", band),
        )
        .detail("Wheezing", format!("{}/2", params.wheezing))
        .detail("Lavoro respiratorio", format!("{}/2", params.work_of_breathing))
        .detail("Espirazione prolungata", format!("{}/2", params.prolonged_expiration)))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([PASS_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_maximum_is_severe() {
        let result = PassAsthmaTool::execute(&PassAsthmaParams {
            wheezing: 2,
            work_of_breathing: 2,
            prolonged_expiration: 2,
        })
        .unwrap();
        assert_eq!(result.primary.value, 6.0);
        assert_eq!(result.classification.label, "SEVERA");
    }
}
