//! APGAR score.

use serde::Deserialize;

use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct ApgarParams {
    pub heart_rate: u32,
    pub respiratory_effort: u32,
    pub muscle_tone: u32,
    pub reflex_irritability: u32,
    pub color: u32,
}

pub static APGAR_BANDS: &[Band] = &[
    Band::at_most(
        3.0,
        "SEVERAMENTE DEPRESSO",
        "Rianimazione immediata - Intubazione e ventilazione",
    ),
    Band::at_most(
        7.0,
        "MODERATAMENTE DEPRESSO",
        "Stimolazione, aspirazione, ossigeno se necessario",
    ),
    Band::otherwise("NORMALE", "Nessun intervento necessario - Cure di routine"),
];

pub struct ApgarTool;

impl ApgarTool {
    pub const NAME: &'static str = "calculate_apgar";

    pub const DESCRIPTION: &'static str =
        "Calcola il punteggio APGAR per valutare le condizioni del neonato";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer(
            "heart_rate",
            "Frequenza cardiaca: 0=Assente, 1=<100 bpm, 2=≥100 bpm",
        )
        .range(0.0, 2.0),
        ParamSpec::integer(
            "respiratory_effort",
            "Sforzo respiratorio: 0=Assente, 1=Debole/irregolare, 2=Buono/pianto vigoroso",
        )
        .range(0.0, 2.0),
        ParamSpec::integer(
            "muscle_tone",
            "Tono muscolare: 0=Flaccido, 1=Flessione degli arti, 2=Movimento attivo",
        )
        .range(0.0, 2.0),
        ParamSpec::integer(
            "reflex_irritability",
            "Riflessi/irritabilità: 0=Nessuna risposta, 1=Smorfie, 2=Pianto vigoroso",
        )
        .range(0.0, 2.0),
        ParamSpec::integer(
            "color",
            "Colorito: 0=Blu/pallido, 1=Rosa con estremità blu, 2=Completamente rosa",
        )
        .range(0.0, 2.0),
    ];

    pub fn execute(params: &ApgarParams) -> Result<CalculationResult, ToolError> {
        let total = params.heart_rate
            + params.respiratory_effort
            + params.muscle_tone
            + params.reflex_irritability
            + params.color;
        let band = classify(f64::from(total), APGAR_BANDS)?;

        Ok(CalculationResult::new(
            "APGAR Score",
            Measure::score("Punteggio totale", total).out_of(10),
            Classification::from_band("Condizione", band),
        )
        .detail("Frequenza cardiaca", format!("{}/2", params.heart_rate))
        .detail("Sforzo respiratorio", format!("{}/2", params.respiratory_effort))
        .detail("Tono muscolare", format!("{}/2", params.muscle_tone))
        .detail("Riflessi/irritabilità", format!("{}/2", params.reflex_irritability))
        .detail("Colorito", format!("{}/2", params.color))
        .note("Valutazione a 1 e 5 minuti dalla nascita"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([APGAR_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apgar_normal_newborn() {
        let result = ApgarTool::execute(&ApgarParams {
            heart_rate: 2,
            respiratory_effort: 2,
            muscle_tone: 1,
            reflex_irritability: 2,
            color: 1,
        })
        .unwrap();
        assert_eq!(result.primary.value, 8.0);
        assert_eq!(result.classification.label, "NORMALE");
        assert_eq!(
            result.classification.recommendation.as_deref(),
            Some("Nessun intervento necessario - Cure di routine")
        );
    }

    #[test]
    fn test_apgar_band_edges() {
        assert_eq!(classify(3.0, APGAR_BANDS).unwrap().label, "SEVERAMENTE DEPRESSO");
        assert_eq!(classify(4.0, APGAR_BANDS).unwrap().label, "MODERATAMENTE DEPRESSO");
        assert_eq!(classify(7.0, APGAR_BANDS).unwrap().label, "MODERATAMENTE DEPRESSO");
    }
}
