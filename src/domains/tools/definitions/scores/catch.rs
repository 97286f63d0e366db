//! CATCH head injury rule.

use serde::Deserialize;

use super::super::common::Tally;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct CatchParams {
    pub vomiting: bool,
    pub headache: bool,
    pub gcsscore: u32,
    pub suspected_skull_fracture: bool,
    pub dangerous_mechanism: bool,
}

pub static CATCH_BANDS: &[Band] = &[
    Band::at_most(0.0, "BASSO", "TC encefalo non necessaria - Osservazione"),
    Band::otherwise("ALTO", "TC encefalo raccomandata"),
];

pub struct CatchScoreTool;

impl CatchScoreTool {
    pub const NAME: &'static str = "calculate_catch_score";

    pub const DESCRIPTION: &'static str = "Calcola CATCH (Canadian Assessment of Tomography for Childhood Head injury) per valutare necessità di TC in trauma cranico pediatrico";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean("vomiting", "Vomito ≥3 episodi dopo il trauma"),
        ParamSpec::boolean("headache", "Cefalea severa persistente"),
        ParamSpec::integer("gcsscore", "GCS a 2 ore dal trauma (13-15)").range(13.0, 15.0),
        ParamSpec::boolean("suspected_skull_fracture", "Segni clinici di frattura cranica"),
        ParamSpec::boolean(
            "dangerous_mechanism",
            "Meccanismo traumatico pericoloso (caduta >1m, incidente auto)",
        ),
    ];

    pub fn execute(params: &CatchParams) -> Result<CalculationResult, ToolError> {
        let tally = Tally::new()
            .add(params.gcsscore < 15, "GCS <15 a 2h dal trauma", 1)
            .add(params.suspected_skull_fracture, "Sospetta frattura cranica", 1)
            .add(params.vomiting, "Vomito ≥3 episodi", 1)
            .add(params.dangerous_mechanism, "Meccanismo traumatico pericoloso", 1)
            .add(params.headache, "Cefalea severa", 1);

        let band = classify(f64::from(tally.total()), CATCH_BANDS)?;
        let result = CalculationResult::new(
            "CATCH Score (Canadian Assessment of Tomography for Childhood Head injury)",
            Measure::score("Punteggio totale", tally.total()).out_of(5),
            Classification::from_band("Livello di rischio", band),
        );

        Ok(tally
            .itemize(result, "Nessun fattore di rischio presente")
            .note("Applicabile per traumi cranici con GCS 13-15, età 0-16 anni")
            .note("La presenza di anche un solo criterio indica necessità di TC")
            .note("Se tutti negativi, rischio lesioni cerebrali <1%"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([CATCH_BANDS])
    }
}
