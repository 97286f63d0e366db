//! Pediatric Glasgow Coma Scale.

use serde::Deserialize;

use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct GcsParams {
    pub eye_opening: u32,
    pub verbal_response: u32,
    pub motor_response: u32,
    pub age_months: u32,
}

pub static GCS_BANDS: &[Band] = &[
    Band::at_most(8.0, "SEVERA", "Terapia intensiva immediata"),
    Band::at_most(12.0, "MODERATA", "Monitoraggio intensivo"),
    Band::otherwise("LIEVE", "Osservazione clinica"),
];

fn prognosis(label: &str) -> &'static str {
    match label {
        "SEVERA" => "Grave",
        "MODERATA" => "Riservata",
        _ => "Buona",
    }
}

pub struct GcsPediatricTool;

impl GcsPediatricTool {
    pub const NAME: &'static str = "calculate_gcs_pediatric";

    pub const DESCRIPTION: &'static str =
        "Calcola Glasgow Coma Scale pediatrica per valutazione neurologica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer(
            "eye_opening",
            "Apertura occhi: 1=Nessuna, 2=Al dolore, 3=Al richiamo, 4=Spontanea",
        )
        .range(1.0, 4.0),
        ParamSpec::integer(
            "verbal_response",
            "Risposta verbale: 1=Nessuna, 2=Suoni incomprensibili, 3=Parole inappropriate, 4=Confuso, 5=Orientato",
        )
        .range(1.0, 5.0),
        ParamSpec::integer(
            "motor_response",
            "Risposta motoria: 1=Nessuna, 2=Estensione, 3=Flessione abnorme, 4=Retrazione, 5=Localizza, 6=Obbedisce",
        )
        .range(1.0, 6.0),
        ParamSpec::integer("age_months", "Età in mesi per adattamento scala").range(0.0, 216.0),
    ];

    pub fn execute(params: &GcsParams) -> Result<CalculationResult, ToolError> {
        let total = params.eye_opening + params.verbal_response + params.motor_response;
        let band = classify(f64::from(total), GCS_BANDS)?;

        Ok(CalculationResult::new(
            "Glasgow Coma Scale Pediatrica",
            Measure::score("Punteggio totale", total).out_of(15),
            Classification::from_band("Severità", band),
        )
        .secondary(Classification::new("Prognosi", prognosis(band.label)))
        .detail("Età paziente", format!("{} mesi", params.age_months))
        .detail("Apertura occhi", format!("{}/4", params.eye_opening))
        .detail("Risposta verbale", format!("{}/5", params.verbal_response))
        .detail("Risposta motoria", format!("{}/6", params.motor_response))
        .note_if(
            params.age_months < 24,
            "Scala adattata per età <2 anni - Valutazione più complessa",
        )
        .note("GCS <9: Intubazione e ventilazione")
        .note("GCS 9-12: Osservazione intensiva")
        .note("GCS >12: Monitoraggio standard"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([GCS_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcs_severity_and_prognosis() {
        let result = GcsPediatricTool::execute(&GcsParams {
            eye_opening: 2,
            verbal_response: 2,
            motor_response: 4,
            age_months: 60,
        })
        .unwrap();
        assert_eq!(result.primary.value, 8.0);
        assert_eq!(result.classification.label, "SEVERA");
        assert_eq!(result.secondary[0].label, "Grave");
    }

    #[test]
    fn test_gcs_infant_note() {
        let p = GcsParams {
            eye_opening: 4,
            verbal_response: 5,
            motor_response: 6,
            age_months: 12,
        };
        let result = GcsPediatricTool::execute(&p).unwrap();
        assert_eq!(result.classification.label, "LIEVE");
        assert!(result.notes[0].contains("<2 anni"));
    }
}
