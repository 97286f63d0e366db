//! Pediatric Asthma Score (PAS).

use serde::Deserialize;

use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct PasAsthmaParams {
    pub respiratory_rate: u32,
    pub oxygen_requirement: u32,
    pub auscultation: u32,
    pub retractions: u32,
    pub dyspnea: u32,
}

pub static PAS_ASTHMA_BANDS: &[Band] = &[
    Band::at_most(
        4.0,
        "LIEVE",
        "Beta-agonisti a breve durata d'azione (SABA), considerare dimissione",
    ),
    Band::at_most(
        7.0,
        "MODERATA",
        "SABA ogni 1-2 ore, considerare steroidi, monitoraggio per 2-4 ore",
    ),
    Band::at_most(
        11.0,
        "SEVERA",
        "SABA continui, steroidi sistemici, considerare Mg solfato, valutare ricovero",
    ),
    Band::otherwise(
        "CRITICA",
        "Trattamento intensivo, SABA+anticolinergici continui, steroidi IV, possibile intubazione",
    ),
];

pub struct PasAsthmaTool;

impl PasAsthmaTool {
    pub const NAME: &'static str = "calculate_pas_asthma";

    pub const DESCRIPTION: &'static str = "Calcola il Pediatric Asthma Score (PAS) per valutare la gravità di un'esacerbazione asmatica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer(
            "respiratory_rate",
            "Frequenza respiratoria: 0=normale, 1=aumentata, 2=molto aumentata, 3=grave tachipnea",
        )
        .range(0.0, 3.0),
        ParamSpec::integer(
            "oxygen_requirement",
            "Richiesta di ossigeno: 0=nessuna (SatO2≥96%), 1=bassa (SatO2 94-95%), 2=moderata (SatO2 90-93%), 3=alta (SatO2<90%)",
        )
        .range(0.0, 3.0),
        ParamSpec::integer(
            "auscultation",
            "Auscultazione: 0=normale, 1=wheezing fine/localizzato, 2=wheezing durante tutta l'espirazione, 3=wheezing in ins/esp o silenzio",
        )
        .range(0.0, 3.0),
        ParamSpec::integer(
            "retractions",
            "Retrazioni: 0=nessuna, 1=lievi intercostali, 2=moderate intercostali/sottosternali, 3=gravi con uso muscoli accessori",
        )
        .range(0.0, 3.0),
        ParamSpec::integer(
            "dyspnea",
            "Dispnea: 0=nessuna, 1=lieve, 2=moderata, 3=grave con difficoltà a parlare/alimentarsi",
        )
        .range(0.0, 3.0),
    ];

    pub fn execute(params: &PasAsthmaParams) -> Result<CalculationResult, ToolError> {
        let total = params.respiratory_rate
            + params.oxygen_requirement
            + params.auscultation
            + params.retractions
            + params.dyspnea;
        let band = classify(f64::from(total), PAS_ASTHMA_BANDS)?;

        Ok(CalculationResult::new(
            "Pediatric Asthma Score (PAS)",
            Measure::score("Punteggio totale", total).out_of(15),
            Classification::from_band("Severità", band),
        )
        .detail("Frequenza respiratoria", format!("{}/3", params.respiratory_rate))
        .detail("Richiesta di ossigeno", format!("{}/3", params.oxygen_requirement))
        .detail("Auscultazione", format!("{}/3", params.auscultation))
        .detail("Retrazioni", format!("{}/3", params.retractions))
        .detail("Dispnea", format!("{}/3", params.dyspnea))
        .note("Utile anche per monitorare la risposta al trattamento"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([PAS_ASTHMA_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pas_asthma_bands() {
        let result = PasAsthmaTool::execute(&PasAsthmaParams {
            respiratory_rate: 2,
            oxygen_requirement: 2,
            auscultation: 2,
            retractions: 1,
            dyspnea: 1,
        })
        .unwrap();
        assert_eq!(result.primary.value, 8.0);
        assert_eq!(result.classification.label, "SEVERA");
        assert_eq!(classify(12.0, PAS_ASTHMA_BANDS).unwrap().label, "CRITICA");
    }
}
