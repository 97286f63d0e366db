//! Modified Centor (McIsaac) score for streptococcal pharyngitis.

use serde::Deserialize;

use super::super::common::Tally;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct CentorParams {
    pub age_years: f64,
    pub exudate: bool,
    pub tender_nodes: bool,
    pub fever: bool,
    pub cough: bool,
}

pub static CENTOR_BANDS: &[Band] = &[
    Band::at_most(1.0, "BASSA (<10%)", "No test rapido, no antibiotici"),
    Band::at_most(
        2.0,
        "INTERMEDIA-BASSA (10-17%)",
        "Considerare test rapido, antibiotici solo se positivo",
    ),
    Band::at_most(
        3.0,
        "INTERMEDIA-ALTA (30-35%)",
        "Test rapido, antibiotici se positivo",
    ),
    Band::otherwise(
        "ALTA (>50%)",
        "Test rapido o trattamento empirico se test non disponibile",
    ),
];

pub struct CentorPediatricTool;

impl CentorPediatricTool {
    pub const NAME: &'static str = "calculate_centor_score_pediatric";

    pub const DESCRIPTION: &'static str =
        "Calcola Centor Score modificato per faringite streptococcica in età pediatrica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("age_years", "Età in anni").range(0.0, 18.0),
        ParamSpec::boolean("exudate", "Essudato tonsillare presente"),
        ParamSpec::boolean("tender_nodes", "Linfoadenopatia cervicale anteriore dolente"),
        ParamSpec::boolean("fever", "Febbre >38°C"),
        ParamSpec::boolean("cough", "Presenza di tosse"),
    ];

    pub fn execute(params: &CentorParams) -> Result<CalculationResult, ToolError> {
        let tally = Tally::new()
            .add(params.exudate, "Essudato tonsillare", 1)
            .add(params.tender_nodes, "Linfoadenopatia cervicale dolente", 1)
            .add(params.fever, "Febbre >38°C", 1)
            .add(!params.cough, "Assenza di tosse", 1)
            .add(
                (3.0..=14.0).contains(&params.age_years),
                "Età 3-14 anni",
                1,
            );

        let band = classify(f64::from(tally.total()), CENTOR_BANDS)?;
        let result = CalculationResult::new(
            "Centor Score Pediatrico (Faringite Streptococcica)",
            Measure::score("Punteggio totale", tally.total()).out_of(5),
            Classification::from_band("Probabilità infezione streptococcica", band),
        )
        .detail("Età paziente", format!("{} anni", params.age_years));

        Ok(tally
            .itemize(result, "Nessun criterio presente")
            .note("Score modificato per pediatria (aggiunge età 3-14 anni)")
            .note("Valore predittivo migliorato associando test rapido (Strep A)"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([CENTOR_BANDS])
    }
}
