//! Rome IV nonretentive fecal incontinence.

use serde::Deserialize;

use super::Checklist;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::CalculationResult;
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct NonretentiveFecalIncontinenceParams {
    pub defecation_inappropriate_places: bool,
    pub fecal_incontinence_frequency: u32,
    pub developmental_age_at_least_4: bool,
    pub toilet_trained: bool,
    pub fecal_retention: bool,
    pub symptoms_duration_months: u32,
    pub organic_disease: bool,
}

impl NonretentiveFecalIncontinenceParams {
    /// Recommendation when the criteria are not met.
    fn fallback(&self) -> &'static str {
        if self.fecal_retention {
            "Considerare stipsi funzionale con incontinenza da overflow"
        } else if !self.toilet_trained || !self.developmental_age_at_least_4 {
            "Completare training toilette, rivalutare"
        } else {
            "Considerare diagnosi alternative"
        }
    }
}

pub struct NonretentiveFecalIncontinenceTool;

impl NonretentiveFecalIncontinenceTool {
    pub const NAME: &'static str = "assess_rome4_nonretentive_fecal_incontinence";

    pub const DESCRIPTION: &'static str =
        "Valuta criteri Rome IV per incontinenza fecale non ritentiva pediatrica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean(
            "defecation_inappropriate_places",
            "Defecazione in luoghi inappropriati",
        ),
        ParamSpec::integer(
            "fecal_incontinence_frequency",
            "Frequenza incontinenza fecale (giorni/mese)",
        )
        .range(0.0, 30.0),
        ParamSpec::boolean(
            "developmental_age_at_least_4",
            "Età di sviluppo di almeno 4 anni",
        ),
        ParamSpec::boolean("toilet_trained", "Bambino ha completato training toilette"),
        ParamSpec::boolean("fecal_retention", "Evidenza di ritenzione fecale"),
        ParamSpec::integer("symptoms_duration_months", "Durata dei sintomi in mesi").range(0.0, 60.0),
        ParamSpec::boolean(
            "organic_disease",
            "Evidenza di malattia organica che spiega i sintomi",
        ),
    ];

    pub fn execute(
        params: &NonretentiveFecalIncontinenceParams,
    ) -> Result<CalculationResult, ToolError> {
        let frequency = params.fecal_incontinence_frequency;

        let checklist = Checklist::new()
            .require(
                params.defecation_inappropriate_places,
                "Defecazione in luoghi inappropriati al contesto socioculturale",
            )
            .check(
                frequency >= 1,
                format!("Incontinenza {frequency} giorni/mese (≥1)"),
                "Nessun episodio di incontinenza nell'ultimo mese",
            )
            .require(
                params.developmental_age_at_least_4,
                "Età di sviluppo di almeno 4 anni",
            )
            .require(params.toilet_trained, "Training toilette completato")
            .exclude(params.fecal_retention, "ritenzione fecale")
            .duration(params.symptoms_duration_months, 1)
            .exclude(params.organic_disease, "malattia organica che spiega i sintomi");

        let met = checklist.all_met();

        Ok(checklist
            .conclude(
                "Incontinenza fecale non ritentiva (Rome IV)",
                "Diagnosi di incontinenza fecale non ritentiva secondo Rome IV".to_string(),
                params.fallback().to_string(),
            )
            .note_if(
                met,
                "Gestione: programma di toilette regolare con rinforzo positivo, supporto psicologico; lassativi non indicati",
            )
            .note("Un esame obiettivo con esplorazione rettale o ecografia aiuta a escludere la ritenzione fecale"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{CRITERIA_MET, CRITERIA_NOT_MET};
    use super::*;

    fn typical() -> NonretentiveFecalIncontinenceParams {
        NonretentiveFecalIncontinenceParams {
            defecation_inappropriate_places: true,
            fecal_incontinence_frequency: 6,
            developmental_age_at_least_4: true,
            toilet_trained: true,
            fecal_retention: false,
            symptoms_duration_months: 3,
            organic_disease: false,
        }
    }

    #[test]
    fn test_all_criteria_met() {
        let result = NonretentiveFecalIncontinenceTool::execute(&typical()).unwrap();
        assert_eq!(result.classification.label, CRITERIA_MET);
        assert_eq!(result.primary.value, 7.0);
    }

    #[test]
    fn test_retention_points_to_overflow() {
        let params = NonretentiveFecalIncontinenceParams {
            fecal_retention: true,
            toilet_trained: false,
            ..typical()
        };
        let result = NonretentiveFecalIncontinenceTool::execute(&params).unwrap();
        assert_eq!(result.classification.label, CRITERIA_NOT_MET);
        assert_eq!(
            result.classification.recommendation.as_deref(),
            Some("Considerare stipsi funzionale con incontinenza da overflow")
        );
    }

    #[test]
    fn test_untrained_child_completes_training() {
        let params = NonretentiveFecalIncontinenceParams {
            developmental_age_at_least_4: false,
            ..typical()
        };
        let result = NonretentiveFecalIncontinenceTool::execute(&params).unwrap();
        assert_eq!(
            result.classification.recommendation.as_deref(),
            Some("Completare training toilette, rivalutare")
        );
    }
}
