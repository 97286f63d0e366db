//! Behavioral Observational Pain Scale (BOPS).

use serde::Deserialize;

use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct BopsParams {
    pub facial_expression: u32,
    pub verbalization: u32,
    pub body_position: u32,
    pub age_months: u32,
}

pub static BOPS_BANDS: &[Band] = &[
    Band::at_most(1.0, "NESSUN DOLORE", "Nessun intervento analgesico richiesto"),
    Band::at_most(
        3.0,
        "DOLORE LIEVE",
        "Considerare analgesia non farmacologica o paracetamolo",
    ),
    Band::at_most(4.0, "DOLORE MODERATO", "Somministrare analgesici non oppioidi"),
    Band::otherwise(
        "DOLORE SEVERO",
        "Somministrare analgesici oppioidi, valutare cause del dolore",
    ),
];

pub struct BopsTool;

impl BopsTool {
    pub const NAME: &'static str = "calculate_bops";

    pub const DESCRIPTION: &'static str = "Calcola il Behavioral Observational Pain Scale (BOPS) per dolore post-operatorio pediatrico (1-7 anni)";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer(
            "facial_expression",
            "Espressione facciale: 0=Neutra/sorridente/calma, 1=Occasionale fronte corrugata/labbra serrate, 2=Frequenti/costanti espressioni dolore",
        )
        .range(0.0, 2.0),
        ParamSpec::integer(
            "verbalization",
            "Verbalizzazione: 0=Normale/dorme silenziosamente, 1=Occasionali lamenti/piagnucola, 2=Pianto intenso/grida/singhiozzi",
        )
        .range(0.0, 2.0),
        ParamSpec::integer(
            "body_position",
            "Posizione corporea: 0=Inattiva/rilassata/movimento normale, 1=Tesa/irrequieta/si contorce, 2=Rigida/flessa/calci/tocca la ferita",
        )
        .range(0.0, 2.0),
        ParamSpec::integer("age_months", "Età in mesi (12-84 mesi = 1-7 anni)").range(12.0, 84.0),
    ];

    pub fn execute(params: &BopsParams) -> Result<CalculationResult, ToolError> {
        let total = params.facial_expression + params.verbalization + params.body_position;
        let band = classify(f64::from(total), BOPS_BANDS)?;

        Ok(CalculationResult::new(
            "Behavioral Observational Pain Scale (BOPS)",
            Measure::score("Punteggio totale", total).out_of(6),
            Classification::from_band("Livello di dolore", band),
        )
        .detail("Espressione facciale", format!("{}/2", params.facial_expression))
        .detail("Verbalizzazione", format!("{}/2", params.verbalization))
        .detail("Posizione corporea", format!("{}/2", params.body_position))
        .note("Rivalutare dopo ogni intervento analgesico"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([BOPS_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bops_moderate_is_exactly_four() {
        assert_eq!(classify(3.0, BOPS_BANDS).unwrap().label, "DOLORE LIEVE");
        assert_eq!(classify(4.0, BOPS_BANDS).unwrap().label, "DOLORE MODERATO");
        assert_eq!(classify(5.0, BOPS_BANDS).unwrap().label, "DOLORE SEVERO");
    }
}
