//! Rome IV aerophagia.

use serde::Deserialize;

use super::{Checklist, evolving_or_alternatives};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::CalculationResult;
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct AerophagiaParams {
    pub air_swallowing: bool,
    pub abdominal_distension: bool,
    pub repetitive_belching: bool,
    pub repetitive_flatulence: bool,
    pub symptoms_duration_months: u32,
    pub symptoms_frequency_weekly: u32,
    pub other_gi_conditions: bool,
}

pub struct AerophagiaTool;

impl AerophagiaTool {
    pub const NAME: &'static str = "assess_rome4_aerophagia";

    pub const DESCRIPTION: &'static str = "Valuta criteri Rome IV per aerofagia pediatrica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean("air_swallowing", "Deglutizione eccessiva di aria"),
        ParamSpec::boolean("abdominal_distension", "Distensione addominale dovuta all'aria"),
        ParamSpec::boolean("repetitive_belching", "Eruttazione ripetuta"),
        ParamSpec::boolean("repetitive_flatulence", "Flatulenza ripetuta"),
        ParamSpec::integer("symptoms_duration_months", "Durata dei sintomi in mesi").range(0.0, 60.0),
        ParamSpec::integer(
            "symptoms_frequency_weekly",
            "Frequenza dei sintomi (giorni/settimana)",
        )
        .range(0.0, 7.0),
        ParamSpec::boolean(
            "other_gi_conditions",
            "Presenza di altre condizioni gastrointestinali che spiegano i sintomi",
        ),
    ];

    pub fn execute(params: &AerophagiaParams) -> Result<CalculationResult, ToolError> {
        let checklist = Checklist::new()
            .require(params.air_swallowing, "Deglutizione eccessiva di aria")
            .require(
                params.abdominal_distension,
                "Distensione addominale da aria intraluminale",
            )
            .check(
                params.repetitive_belching || params.repetitive_flatulence,
                "Eruttazioni ripetute e/o flatulenza aumentata",
                "Assenza di eruttazioni ripetute o flatulenza",
            )
            .check(
                params.symptoms_frequency_weekly >= 2,
                format!("Sintomi {} giorni/settimana (≥2)", params.symptoms_frequency_weekly),
                format!(
                    "Sintomi {} giorni/settimana (richiesti ≥2)",
                    params.symptoms_frequency_weekly
                ),
            )
            .duration(params.symptoms_duration_months, 2)
            .exclude(
                params.other_gi_conditions,
                "altre condizioni gastrointestinali che spiegano i sintomi",
            );

        let evolving = checklist.unmet_count() <= 2 && params.symptoms_duration_months >= 1;

        Ok(checklist
            .conclude(
                "Aerofagia (Rome IV)",
                "Diagnosi di aerofagia secondo Rome IV".to_string(),
                evolving_or_alternatives(evolving, "aerofagia"),
            )
            .note("Gestione: rassicurazione, identificazione di fattori scatenanti (ansia, gomme da masticare, bevande gassate), tecniche di rilassamento"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}
