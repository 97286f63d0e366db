//! Rome IV functional dyspepsia, with postprandial distress / epigastric pain subtyping.

use serde::Deserialize;

use super::{Checklist, evolving_or_alternatives};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionalDyspepsiaParams {
    pub bothersome_postprandial_fullness: bool,
    pub early_satiety: bool,
    pub epigastric_pain: bool,
    pub epigastric_burning: bool,
    pub symptoms_duration_months: u32,
    pub symptoms_frequency_weekly: u32,
    pub organic_disease: bool,
}

impl FunctionalDyspepsiaParams {
    fn postprandial_distress(&self) -> bool {
        self.bothersome_postprandial_fullness || self.early_satiety
    }

    fn epigastric_pain_syndrome(&self) -> bool {
        self.epigastric_pain || self.epigastric_burning
    }

    fn symptoms(&self) -> Vec<&'static str> {
        [
            (self.bothersome_postprandial_fullness, "pienezza postprandiale"),
            (self.early_satiety, "sazietà precoce"),
            (self.epigastric_pain, "dolore epigastrico"),
            (self.epigastric_burning, "bruciore epigastrico"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }

    fn subtype(&self) -> &'static str {
        match (self.postprandial_distress(), self.epigastric_pain_syndrome()) {
            (true, true) => {
                "Sindrome da distress postprandiale e sindrome da dolore epigastrico (Overlap)"
            }
            (true, false) => "Sindrome da distress postprandiale",
            (false, true) => "Sindrome da dolore epigastrico",
            (false, false) => "Non classificabile",
        }
    }
}

pub struct FunctionalDyspepsiaTool;

impl FunctionalDyspepsiaTool {
    pub const NAME: &'static str = "assess_rome4_functional_dyspepsia";

    pub const DESCRIPTION: &'static str =
        "Valuta criteri Rome IV per dispepsia funzionale pediatrica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean(
            "bothersome_postprandial_fullness",
            "Sensazione fastidiosa di pienezza postprandiale",
        ),
        ParamSpec::boolean(
            "early_satiety",
            "Sazietà precoce che impedisce di terminare un pasto normale",
        ),
        ParamSpec::boolean("epigastric_pain", "Dolore epigastrico"),
        ParamSpec::boolean("epigastric_burning", "Bruciore epigastrico"),
        ParamSpec::integer("symptoms_duration_months", "Durata dei sintomi in mesi").range(0.0, 60.0),
        ParamSpec::integer(
            "symptoms_frequency_weekly",
            "Frequenza dei sintomi (giorni/settimana)",
        )
        .range(0.0, 7.0),
        ParamSpec::boolean(
            "organic_disease",
            "Evidenza di malattia organica che spiega i sintomi",
        ),
    ];

    pub fn execute(params: &FunctionalDyspepsiaParams) -> Result<CalculationResult, ToolError> {
        let symptoms = params.symptoms();

        let checklist = Checklist::new()
            .check(
                !symptoms.is_empty(),
                format!("Sintomi dispeptici: {}", symptoms.join(", ")),
                "Nessun sintomo dispeptico",
            )
            .check(
                params.symptoms_frequency_weekly >= 4,
                format!(
                    "Sintomi {} giorni/settimana (≥4)",
                    params.symptoms_frequency_weekly
                ),
                format!(
                    "Sintomi {} giorni/settimana (richiesti ≥4)",
                    params.symptoms_frequency_weekly
                ),
            )
            .duration(params.symptoms_duration_months, 2)
            .exclude(params.organic_disease, "malattia organica che spiega i sintomi");

        let evolving = !symptoms.is_empty()
            && !params.organic_disease
            && params.symptoms_duration_months >= 1;
        let met = checklist.all_met();
        let subtype = if met {
            params.subtype()
        } else {
            "Non classificabile"
        };

        Ok(checklist
            .conclude(
                "Dispepsia funzionale (Rome IV)",
                "Diagnosi di dispepsia funzionale secondo Rome IV".to_string(),
                evolving_or_alternatives(evolving, "dispepsia funzionale"),
            )
            .secondary(Classification::new("Sottotipo", subtype))
            .note_if(
                met && params.postprandial_distress(),
                "Distress postprandiale: pasti piccoli e frequenti, evitare cibi grassi; considerare procinetici",
            )
            .note_if(
                met && params.epigastric_pain_syndrome(),
                "Dolore epigastrico: considerare prova con inibitori di pompa protonica per 4-8 settimane",
            )
            .note("Segni d'allarme (calo ponderale, disfagia, ematemesi, anemia) richiedono endoscopia"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}
