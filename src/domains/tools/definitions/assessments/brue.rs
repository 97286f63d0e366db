//! Brief Resolved Unexplained Event criteria and risk (AAP 2016).

use serde::Deserialize;

use super::super::common::{Tally, list_or};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification, Measure, si_no};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventFeature {
    Cyanosis,
    Pallor,
    AbsentBreathing,
    MarkedChangeInTone,
    AlteredResponsiveness,
}

impl EventFeature {
    fn label(self) -> &'static str {
        match self {
            Self::Cyanosis => "cianosi",
            Self::Pallor => "pallore",
            Self::AbsentBreathing => "respiro assente",
            Self::MarkedChangeInTone => "marcata alterazione del tono",
            Self::AlteredResponsiveness => "alterata responsività",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrueParams {
    pub age_less_than_1_year: bool,
    pub event_brief: bool,
    pub no_explanation: bool,
    pub event_features: Vec<EventFeature>,
    #[serde(default)]
    pub age_less_than_2_months: bool,
    #[serde(default)]
    pub prematurity: bool,
    #[serde(default)]
    pub event_duration_gt_1_min: bool,
    #[serde(default)]
    pub multiple_events: bool,
    #[serde(default)]
    pub cpr_required: bool,
}

impl BrueParams {
    fn is_brue(&self) -> bool {
        self.age_less_than_1_year
            && self.event_brief
            && self.no_explanation
            && !self.event_features.is_empty()
    }
}

pub struct BrueCriteriaTool;

impl BrueCriteriaTool {
    pub const NAME: &'static str = "assess_brue_criteria";

    pub const DESCRIPTION: &'static str = "Valuta i criteri per Brief Resolved Unexplained Events (BRUE) nei lattanti e classifica il rischio";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean("age_less_than_1_year", "Età <1 anno"),
        ParamSpec::boolean("event_brief", "Evento breve (<1 minuto) e risolto completamente"),
        ParamSpec::boolean("no_explanation", "Nessuna spiegazione identificabile dopo valutazione"),
        ParamSpec::multi_choice(
            "event_features",
            "Caratteristiche dell'evento (cianosi, pallore, respiro assente, alterato tono, alterata responsività)",
            &[
                "cyanosis",
                "pallor",
                "absent_breathing",
                "marked_change_in_tone",
                "altered_responsiveness",
            ],
        ),
        ParamSpec::boolean("age_less_than_2_months", "Età <2 mesi").default_bool(false),
        ParamSpec::boolean(
            "prematurity",
            "Prematurità <32 settimane o età <45 settimane post-concezionali",
        )
        .default_bool(false),
        ParamSpec::boolean("event_duration_gt_1_min", "Durata evento >1 minuto").default_bool(false),
        ParamSpec::boolean("multiple_events", "Eventi multipli").default_bool(false),
        ParamSpec::boolean("cpr_required", "RCP richiesta da personale sanitario").default_bool(false),
    ];

    pub fn execute(params: &BrueParams) -> Result<CalculationResult, ToolError> {
        let high_risk = Tally::new()
            .add(params.age_less_than_2_months, "Età <2 mesi", 1)
            .add(params.prematurity, "Prematurità", 1)
            .add(params.event_duration_gt_1_min, "Durata evento >1 minuto", 1)
            .add(params.multiple_events, "Eventi multipli", 1)
            .add(params.cpr_required, "RCP richiesta da sanitari", 1);

        let (diagnosis, risk) = if !params.is_brue() {
            (
                Classification::new("Diagnosi", "NON SODDISFA CRITERI BRUE")
                    .recommending("Non classificabile come BRUE. Valutare diagnosi alternative."),
                "N/A",
            )
        } else if high_risk.count() > 0 {
            (
                Classification::new("Diagnosi", "BRUE AD ALTO RISCHIO")
                    .recommending("Ricovero per monitoraggio e valutazione approfondita (ECG, poligrafia, EEG, reflusso GE)."),
                "ALTO",
            )
        } else {
            (
                Classification::new("Diagnosi", "BRUE A BASSO RISCHIO").recommending(
                    "Considerare dimissione dopo esame obiettivo normale ed educazione ai genitori.",
                ),
                "BASSO",
            )
        };

        let mut features: Vec<&str> = Vec::new();
        for feature in &params.event_features {
            if !features.contains(&feature.label()) {
                features.push(feature.label());
            }
        }

        let result = CalculationResult::new(
            "Valutazione Brief Resolved Unexplained Event (BRUE)",
            Measure::score("Fattori di alto rischio", high_risk.total()).out_of(5),
            diagnosis,
        )
        .secondary(Classification::new("Rischio", risk))
        .detail("Età <1 anno", si_no(params.age_less_than_1_year))
        .detail("Evento breve e risolto", si_no(params.event_brief))
        .detail("Nessuna spiegazione", si_no(params.no_explanation))
        .detail("Caratteristiche dell'evento", list_or(&features, "Nessuna"));

        Ok(high_risk
            .itemize(result, "Nessun fattore di alto rischio")
            .note("BRUE sostituisce il termine ALTE (Apparent Life-Threatening Event)")
            .note("Educare sempre i genitori sulla gestione e il monitoraggio del bambino"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}
