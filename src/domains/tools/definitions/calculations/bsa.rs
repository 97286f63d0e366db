//! Body surface area by DuBois and Mosteller.

use serde::Deserialize;

use crate::domains::formulas::body::{bsa_dubois, bsa_mosteller};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification, Measure};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct BsaParams {
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Below this weight Mosteller is preferred over DuBois.
const MOSTELLER_BELOW_KG: f64 = 10.0;

pub struct BsaTool;

impl BsaTool {
    pub const NAME: &'static str = "calculate_bsa";

    pub const DESCRIPTION: &'static str =
        "Calcola la superficie corporea (BSA) usando formule di DuBois e Mosteller";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("weight_kg", "Peso del paziente in kg").range(0.1, 200.0),
        ParamSpec::number("height_cm", "Altezza del paziente in cm").range(10.0, 250.0),
    ];

    pub fn execute(params: &BsaParams) -> Result<CalculationResult, ToolError> {
        let dubois = bsa_dubois(params.weight_kg, params.height_cm)?;
        let mosteller = bsa_mosteller(params.weight_kg, params.height_cm)?;

        let (formula, recommended) = if params.weight_kg < MOSTELLER_BELOW_KG {
            ("Mosteller", mosteller)
        } else {
            ("DuBois", dubois)
        };

        Ok(CalculationResult::new(
            "Calcolo Superficie Corporea (BSA)",
            Measure::quantity("BSA raccomandata", recommended, 2, "m²"),
            Classification::new("Formula raccomandata", formula),
        )
        .detail("Peso", format!("{} kg", params.weight_kg))
        .detail("Altezza", format!("{} cm", params.height_cm))
        .detail("Formula DuBois", format!("{dubois:.2} m²"))
        .detail("Formula Mosteller", format!("{mosteller:.2} m²"))
        .note("DuBois: più accurata per bambini >10 kg")
        .note("Mosteller: più semplice, adatta per tutti i pesi")
        .note("BSA pediatrica normale: 0.25-1.8 m²"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}
