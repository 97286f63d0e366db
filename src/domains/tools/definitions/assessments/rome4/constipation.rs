//! Rome IV functional constipation (children with a developmental age of 4+).

use serde::Deserialize;

use super::super::super::common::Tally;
use super::{Checklist, evolving_or_alternatives};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::CalculationResult;
use crate::domains::tools::schema::ParamSpec;

fn toilet_trained_default() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConstipationParams {
    pub bowel_movements_weekly: u32,
    pub fecal_incontinence: bool,
    pub stool_retention: bool,
    pub painful_defecation: bool,
    pub large_fecal_mass: bool,
    pub large_diameter_stools: bool,
    pub symptoms_duration_months: u32,
    #[serde(default = "toilet_trained_default")]
    pub toilet_trained: bool,
}

pub struct ConstipationTool;

impl ConstipationTool {
    pub const NAME: &'static str = "assess_rome4_constipation";

    pub const DESCRIPTION: &'static str =
        "Valuta criteri Rome IV per stipsi funzionale pediatrica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer("bowel_movements_weekly", "Numero di evacuazioni settimanali")
            .range(0.0, 21.0),
        ParamSpec::boolean(
            "fecal_incontinence",
            "Almeno 1 episodio di incontinenza fecale settimanale (in bambini continenti)",
        ),
        ParamSpec::boolean(
            "stool_retention",
            "Storia di posture o comportamenti di ritenzione fecale",
        ),
        ParamSpec::boolean(
            "painful_defecation",
            "Storia di defecazione dolorosa o difficoltosa",
        ),
        ParamSpec::boolean("large_fecal_mass", "Presenza di grande massa fecale nel retto"),
        ParamSpec::boolean("large_diameter_stools", "Storia di feci di grande diametro"),
        ParamSpec::integer("symptoms_duration_months", "Durata dei sintomi in mesi").range(0.0, 60.0),
        ParamSpec::boolean("toilet_trained", "Bambino ha completato training toilette")
            .default_bool(true),
    ];

    pub fn execute(params: &ConstipationParams) -> Result<CalculationResult, ToolError> {
        let features = Tally::new()
            .add(
                params.bowel_movements_weekly < 2,
                "Meno di 2 evacuazioni a settimana",
                1,
            )
            .add(
                params.fecal_incontinence && params.toilet_trained,
                "Almeno 1 episodio di incontinenza fecale a settimana",
                1,
            )
            .add(
                params.stool_retention,
                "Posture o comportamenti di ritenzione",
                1,
            )
            .add(params.painful_defecation, "Defecazione dolorosa o difficoltosa", 1)
            .add(params.large_fecal_mass, "Grande massa fecale nel retto", 1)
            .add(params.large_diameter_stools, "Feci di grande diametro", 1);
        let present = features.count();

        let checklist = Checklist::new()
            .check(
                present >= 2,
                format!("Almeno 2 criteri presenti ({present}/6)"),
                format!("Criteri presenti: {present}/6 (richiesti ≥2)"),
            )
            .duration(params.symptoms_duration_months, 1);

        let evolving = present >= 1 && params.symptoms_duration_months < 1;
        let met = checklist.all_met();

        let result = checklist
            .conclude(
                "Stipsi funzionale (Rome IV)",
                "Diagnosi di stipsi funzionale secondo Rome IV".to_string(),
                evolving_or_alternatives(evolving, "stipsi funzionale"),
            )
            .detail("Evacuazioni settimanali", params.bowel_movements_weekly);

        Ok(features
            .itemize(result, "Nessun criterio presente")
            .note_if(
                params.fecal_incontinence && !params.toilet_trained,
                "Incontinenza fecale non conteggiata: training toilette non completato",
            )
            .note_if(
                met,
                "Trattamento: disimpattazione se massa fecale, PEG di mantenimento, educazione e training toilette",
            )
            .note("Escludere segnali d'allarme: esordio <1 mese, ritardata emissione del meconio, distensione addominale grave, alterazioni neurologiche"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{CRITERIA_MET, CRITERIA_NOT_MET};
    use super::*;

    fn params() -> ConstipationParams {
        ConstipationParams {
            bowel_movements_weekly: 1,
            fecal_incontinence: false,
            stool_retention: false,
            painful_defecation: true,
            large_fecal_mass: false,
            large_diameter_stools: false,
            symptoms_duration_months: 2,
            toilet_trained: true,
        }
    }

    #[test]
    fn test_two_features_for_a_month() {
        let result = ConstipationTool::execute(&params()).unwrap();
        assert_eq!(result.classification.label, CRITERIA_MET);
    }

    #[test]
    fn test_incontinence_ignored_before_toilet_training() {
        let p = ConstipationParams {
            bowel_movements_weekly: 5,
            fecal_incontinence: true,
            toilet_trained: false,
            ..params()
        };
        let result = ConstipationTool::execute(&p).unwrap();
        assert_eq!(result.classification.label, CRITERIA_NOT_MET);
        assert!(result.render().contains("Criteri presenti: 1/6"));
    }

    #[test]
    fn test_recent_onset_is_evolving() {
        let p = ConstipationParams {
            symptoms_duration_months: 0,
            ..params()
        };
        let result = ConstipationTool::execute(&p).unwrap();
        assert_eq!(
            result.classification.recommendation.as_deref(),
            Some("Possibile stipsi funzionale in evoluzione, rivalutare")
        );
    }

    #[test]
    fn test_toilet_trained_defaults_to_true() {
        let p: ConstipationParams = serde_json::from_value(serde_json::json!({
            "bowel_movements_weekly": 3,
            "fecal_incontinence": true,
            "stool_retention": true,
            "painful_defecation": false,
            "large_fecal_mass": false,
            "large_diameter_stools": false,
            "symptoms_duration_months": 2
        }))
        .unwrap();
        assert!(p.toilet_trained);
        let result = ConstipationTool::execute(&p).unwrap();
        assert_eq!(result.classification.label, CRITERIA_MET);
    }
}
