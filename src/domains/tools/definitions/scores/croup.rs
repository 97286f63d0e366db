//! Westley croup score.

use serde::Deserialize;

use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct WestleyParams {
    pub stridor: u32,
    pub retraction: u32,
    pub air_entry: u32,
    pub cyanosis: u32,
    pub consciousness: u32,
}

pub static WESTLEY_BANDS: &[Band] = &[
    Band::at_most(2.0, "LIEVE", "Gestione domiciliare - Steroidi singola dose"),
    Band::at_most(5.0, "MODERATO", "Osservazione ospedaliera - Steroidi e adrenalina"),
    Band::at_most(11.0, "SEVERO", "Ricovero urgente - Trattamento intensivo"),
    Band::otherwise("CRITICO", "Potenziale intubazione - Terapia intensiva"),
];

pub struct WestleyCroupTool;

impl WestleyCroupTool {
    pub const NAME: &'static str = "calculate_westley_croup_score";

    pub const DESCRIPTION: &'static str =
        "Calcola Westley Croup Score per valutare la gravità del croup pediatrico";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer(
            "stridor",
            "Stridore inspiratorio: 0=Nessuno, 1=Con agitazione, 2=A riposo",
        )
        .range(0.0, 2.0),
        ParamSpec::integer(
            "retraction",
            "Retrazioni: 0=Nessuna, 1=Lievi, 2=Moderate, 3=Severe",
        )
        .range(0.0, 3.0),
        ParamSpec::integer(
            "air_entry",
            "Ingresso d'aria: 0=Normale, 1=Diminuito, 2=Marcatamente diminuito",
        )
        .range(0.0, 2.0),
        ParamSpec::integer("cyanosis", "Cianosi: 0=Nessuna, 4=Con agitazione, 5=A riposo")
            .range(0.0, 5.0),
        ParamSpec::integer("consciousness", "Livello di coscienza: 0=Normale, 5=Alterato")
            .range(0.0, 5.0),
    ];

    pub fn execute(params: &WestleyParams) -> Result<CalculationResult, ToolError> {
        let total = params.stridor
            + params.retraction
            + params.air_entry
            + params.cyanosis
            + params.consciousness;
        let band = classify(f64::from(total), WESTLEY_BANDS)?;

        Ok(CalculationResult::new(
            "Westley Croup Score",
            Measure::score("Punteggio totale", total).out_of(17),
            Classification::from_band("Severità", band),
        )
        .detail("Stridore inspiratorio", format!("{}/2", params.stridor))
        .detail("Retrazioni", format!("{}/3", params.retraction))
        .detail("Ingresso d'aria", format!("{}/2", params.air_entry))
        .detail("Cianosi", format!("{}/5", params.cyanosis))
        .detail("Livello di coscienza", format!("{}/5", params.consciousness))
        .note("≥12: Croup critico - Insufficienza respiratoria imminente"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([WESTLEY_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_westley_moderate() {
        let result = WestleyCroupTool::execute(&WestleyParams {
            stridor: 2,
            retraction: 2,
            air_entry: 1,
            cyanosis: 0,
            consciousness: 0,
        })
        .unwrap();
        assert_eq!(result.primary.value, 5.0);
        assert_eq!(result.classification.label, "MODERATO");
    }

    #[test]
    fn test_westley_critical() {
        assert_eq!(classify(12.0, WESTLEY_BANDS).unwrap().label, "CRITICO");
        assert_eq!(classify(11.0, WESTLEY_BANDS).unwrap().label, "SEVERO");
    }
}
