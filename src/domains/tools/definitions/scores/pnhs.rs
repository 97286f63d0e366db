//! Pediatric NAFLD Histological Score (PNHS).

use serde::Deserialize;

use super::super::common::Tally;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify, round_to, si_no};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct PnhsParams {
    pub bmi_zscore: f64,
    pub ast_iu_l: f64,
    pub alt_iu_l: f64,
    pub insulin_resistance: bool,
    #[serde(default)]
    pub apnea_obstructive_sleep: bool,
}

pub static PNHS_BANDS: &[Band] = &[
    Band::at_most(
        1.0,
        "BASSA PROBABILITÀ DI NASH",
        "Monitoraggio standard, modifiche stile di vita, controllo ogni 6-12 mesi",
    ),
    Band::at_most(
        2.0,
        "PROBABILITÀ INTERMEDIA DI NASH",
        "Monitoraggio più frequente, considerare valutazione specialistica",
    ),
    Band::otherwise(
        "ALTA PROBABILITÀ DI NASH",
        "Valutazione specialistica epatologica, considerare biopsia epatica",
    ),
];

pub struct PnhsTool;

impl PnhsTool {
    pub const NAME: &'static str = "calculate_pnhs";

    pub const DESCRIPTION: &'static str = "Calcola il Pediatric NAFLD Histological Score (PNHS) per distinguere NASH (steatoepatite) da semplice steatosi";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("bmi_zscore", "BMI z-score").range(-3.0, 5.0),
        ParamSpec::number("ast_iu_l", "AST in IU/L").range(5.0, 1000.0),
        ParamSpec::number("alt_iu_l", "ALT in IU/L").range(5.0, 1000.0),
        ParamSpec::boolean(
            "insulin_resistance",
            "Presenza di resistenza insulinica (HOMA-IR >2.5 o diagnosi clinica)",
        ),
        ParamSpec::boolean("apnea_obstructive_sleep", "Diagnosi di apnea ostruttiva del sonno")
            .default_bool(false),
    ];

    pub fn execute(params: &PnhsParams) -> Result<CalculationResult, ToolError> {
        let ratio = params.ast_iu_l / params.alt_iu_l;
        let tally = Tally::new()
            .add(params.bmi_zscore > 2.0, "BMI z-score elevato (>2.0)", 1)
            .add(ratio > 0.8, "Rapporto AST/ALT elevato (>0.8)", 1)
            .add(params.insulin_resistance, "Resistenza insulinica presente", 1)
            .add(
                params.apnea_obstructive_sleep,
                "Apnea ostruttiva del sonno presente",
                1,
            );

        let band = classify(f64::from(tally.total()), PNHS_BANDS)?;
        let result = CalculationResult::new(
            "Pediatric NAFLD Histological Score (PNHS)",
            Measure::score("Punteggio", tally.total()).out_of(4),
            Classification::from_band("Interpretazione", band),
        )
        .detail("BMI z-score", params.bmi_zscore)
        .detail("AST/ALT ratio", format!("{:.2}", round_to(ratio, 2)))
        .detail("Resistenza insulinica", si_no(params.insulin_resistance))
        .detail(
            "Apnea ostruttiva del sonno",
            si_no(params.apnea_obstructive_sleep),
        );

        Ok(tally
            .itemize(result, "Nessun criterio presente")
            .note("Non sostituisce la biopsia epatica che rimane il gold standard"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([PNHS_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pnhs_high_probability() {
        let result = PnhsTool::execute(&PnhsParams {
            bmi_zscore: 2.5,
            ast_iu_l: 90.0,
            alt_iu_l: 100.0,
            insulin_resistance: true,
            apnea_obstructive_sleep: false,
        })
        .unwrap();
        assert_eq!(result.primary.value, 3.0);
        assert_eq!(result.classification.label, "ALTA PROBABILITÀ DI NASH");
        assert!(result.render().contains("AST/ALT ratio: 0.90"));
    }

    #[test]
    fn test_pnhs_low_probability() {
        let result = PnhsTool::execute(&PnhsParams {
            bmi_zscore: 1.0,
            ast_iu_l: 30.0,
            alt_iu_l: 60.0,
            insulin_resistance: false,
            apnea_obstructive_sleep: false,
        })
        .unwrap();
        assert_eq!(result.classification.label, "BASSA PROBABILITÀ DI NASH");
    }
}
