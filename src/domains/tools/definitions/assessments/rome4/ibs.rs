//! Rome IV irritable bowel syndrome.

use serde::Deserialize;

use super::{Checklist, evolving_or_alternatives};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoolPattern {
    Constipation,
    Diarrhea,
    Mixed,
    Unspecified,
}

impl StoolPattern {
    fn subtype(self) -> &'static str {
        match self {
            Self::Constipation => "IBS-C (con prevalente stipsi)",
            Self::Diarrhea => "IBS-D (con prevalente diarrea)",
            Self::Mixed => "IBS-M (con alvo misto)",
            Self::Unspecified => "IBS-U (non classificata)",
        }
    }

    fn management(self) -> &'static str {
        match self {
            Self::Constipation => "IBS-C: fibre solubili, PEG; valutare linaclotide negli adolescenti",
            Self::Diarrhea => "IBS-D: dieta low-FODMAP guidata, loperamide al bisogno",
            Self::Mixed | Self::Unspecified => {
                "Trattamento sintomatico guidato dal sintomo prevalente"
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IbsParams {
    pub abdominal_pain_days_monthly: u32,
    pub pain_related_to_defecation: bool,
    pub stool_frequency_change: bool,
    pub stool_form_change: bool,
    pub symptoms_duration_months: u32,
    pub predominant_stool_pattern: StoolPattern,
    pub organic_disease: bool,
}

impl IbsParams {
    fn bowel_associations(&self) -> Vec<&'static str> {
        [
            (self.pain_related_to_defecation, "correlato alla defecazione"),
            (self.stool_frequency_change, "cambio nella frequenza delle feci"),
            (self.stool_form_change, "cambio nella forma delle feci"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }
}

pub struct IbsTool;

impl IbsTool {
    pub const NAME: &'static str = "assess_rome4_ibs";

    pub const DESCRIPTION: &'static str =
        "Valuta criteri Rome IV per sindrome dell'intestino irritabile pediatrica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer(
            "abdominal_pain_days_monthly",
            "Giorni con dolore addominale al mese",
        )
        .range(0.0, 30.0),
        ParamSpec::boolean(
            "pain_related_to_defecation",
            "Dolore addominale associato alla defecazione",
        ),
        ParamSpec::boolean(
            "stool_frequency_change",
            "Dolore associato a cambio nella frequenza delle feci",
        ),
        ParamSpec::boolean(
            "stool_form_change",
            "Dolore associato a cambio nella forma/consistenza delle feci",
        ),
        ParamSpec::integer("symptoms_duration_months", "Durata dei sintomi in mesi").range(0.0, 60.0),
        ParamSpec::choice(
            "predominant_stool_pattern",
            "Pattern predominante delle feci: constipation, diarrhea, mixed, unspecified",
            &["constipation", "diarrhea", "mixed", "unspecified"],
        ),
        ParamSpec::boolean(
            "organic_disease",
            "Evidenza di malattia organica che spiega i sintomi",
        ),
    ];

    pub fn execute(params: &IbsParams) -> Result<CalculationResult, ToolError> {
        let associations = params.bowel_associations();
        let days = params.abdominal_pain_days_monthly;

        let checklist = Checklist::new()
            .check(
                days >= 4,
                format!("Dolore addominale {days} giorni/mese (≥4)"),
                format!("Dolore addominale {days} giorni/mese (richiesti ≥4)"),
            )
            .check(
                !associations.is_empty(),
                format!("Dolore {}", associations.join(", ")),
                "Dolore non associato a defecazione o cambiamenti dell'alvo",
            )
            .duration(params.symptoms_duration_months, 2)
            .exclude(params.organic_disease, "malattia organica che spiega i sintomi");

        let evolving = days >= 2
            && !associations.is_empty()
            && !params.organic_disease
            && params.symptoms_duration_months >= 1;
        let met = checklist.all_met();

        Ok(checklist
            .conclude(
                "Sindrome dell'intestino irritabile (Rome IV)",
                "Diagnosi di sindrome dell'intestino irritabile secondo Rome IV".to_string(),
                evolving_or_alternatives(evolving, "sindrome dell'intestino irritabile"),
            )
            .secondary(Classification::new(
                "Sottotipo",
                params.predominant_stool_pattern.subtype(),
            ))
            .note_if(met, params.predominant_stool_pattern.management())
            .note_if(
                met,
                "Approccio biopsicosociale: educazione, terapia cognitivo-comportamentale, ipnoterapia",
            )
            .note("Nei pazienti con stipsi verificare che il dolore non si risolva con il trattamento della stipsi"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}
