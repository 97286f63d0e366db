//! Kawasaki disease diagnostic criteria.

use serde::Deserialize;

use super::super::common::{count_true, list_or};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification, Measure, si_no};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabFinding {
    ElevatedCrp,
    ElevatedEsr,
    Anemia,
    Hypoalbuminemia,
    ElevatedAlt,
    Leukocytosis,
    Thrombocytosis,
    Pyuria,
}

impl LabFinding {
    fn label(self) -> &'static str {
        match self {
            Self::ElevatedCrp => "PCR elevata",
            Self::ElevatedEsr => "VES elevata",
            Self::Anemia => "Anemia",
            Self::Hypoalbuminemia => "Ipoalbuminemia",
            Self::ElevatedAlt => "ALT elevate",
            Self::Leukocytosis => "Leucocitosi",
            Self::Thrombocytosis => "Piastrinosi",
            Self::Pyuria => "Piuria sterile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EchoFinding {
    CoronaryArteryAbnormality,
    MitralRegurgitation,
    PericardialEffusion,
    DecreasedLvFunction,
    #[serde(rename = "z_score_gt_2")]
    ZScoreAbove2,
}

impl EchoFinding {
    fn label(self) -> &'static str {
        match self {
            Self::CoronaryArteryAbnormality => "Anomalie coronariche",
            Self::MitralRegurgitation => "Insufficienza mitralica",
            Self::PericardialEffusion => "Versamento pericardico",
            Self::DecreasedLvFunction => "Ridotta funzione ventricolare sinistra",
            Self::ZScoreAbove2 => "Z-score coronarico >2",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct KawasakiParams {
    pub fever_5_days: bool,
    pub conjunctival_injection: bool,
    pub oral_changes: bool,
    pub extremity_changes: bool,
    pub polymorphous_rash: bool,
    pub cervical_lymphadenopathy: bool,
    #[serde(default)]
    pub laboratory_findings: Vec<LabFinding>,
    #[serde(default)]
    pub echocardiogram_findings: Vec<EchoFinding>,
}

pub struct KawasakiCriteriaTool;

impl KawasakiCriteriaTool {
    pub const NAME: &'static str = "calculate_kawasaki_criteria";

    pub const DESCRIPTION: &'static str =
        "Valuta i criteri diagnostici per la malattia di Kawasaki in età pediatrica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean("fever_5_days", "Febbre persistente per ≥5 giorni"),
        ParamSpec::boolean(
            "conjunctival_injection",
            "Iniezione congiuntivale bilaterale non essudativa",
        ),
        ParamSpec::boolean(
            "oral_changes",
            "Alterazioni del cavo orale (labbra screpolate, eritema orofaringeo, lingua a fragola)",
        ),
        ParamSpec::boolean(
            "extremity_changes",
            "Alterazioni delle estremità (eritema palmo-plantare, edema, desquamazione)",
        ),
        ParamSpec::boolean("polymorphous_rash", "Esantema polimorfo"),
        ParamSpec::boolean(
            "cervical_lymphadenopathy",
            "Linfoadenopatia cervicale (>1.5 cm di diametro)",
        ),
        ParamSpec::multi_choice(
            "laboratory_findings",
            "Esami di laboratorio anormali",
            &[
                "elevated_crp",
                "elevated_esr",
                "anemia",
                "hypoalbuminemia",
                "elevated_alt",
                "leukocytosis",
                "thrombocytosis",
                "pyuria",
            ],
        )
        .optional(),
        ParamSpec::multi_choice(
            "echocardiogram_findings",
            "Reperti ecocardiografici",
            &[
                "coronary_artery_abnormality",
                "mitral_regurgitation",
                "pericardial_effusion",
                "decreased_lv_function",
                "z_score_gt_2",
            ],
        )
        .optional(),
    ];

    pub fn execute(params: &KawasakiParams) -> Result<CalculationResult, ToolError> {
        let clinical = [
            (params.conjunctival_injection, "Iniezione congiuntivale"),
            (params.oral_changes, "Alterazioni del cavo orale"),
            (params.extremity_changes, "Alterazioni delle estremità"),
            (params.polymorphous_rash, "Esantema polimorfo"),
            (params.cervical_lymphadenopathy, "Linfoadenopatia cervicale"),
        ];
        let count = count_true(&clinical.map(|(present, _)| present));
        let present: Vec<&str> = clinical
            .iter()
            .filter(|(p, _)| *p)
            .map(|(_, label)| *label)
            .collect();

        let (diagnosis, recommendation) = if !params.fever_5_days {
            (
                "CRITERI NON SODDISFATTI",
                "Malattia di Kawasaki improbabile. La febbre per ≥5 giorni è un criterio essenziale.",
            )
        } else if count >= 4 {
            (
                "KAWASAKI CLASSICO",
                "Diagnosi di Kawasaki classico. Iniziare IVIG e ASA ad alte dosi entro 10 giorni dall'esordio.",
            )
        } else if count >= 2 {
            (
                "POSSIBILE KAWASAKI INCOMPLETO",
                "Sospetto Kawasaki incompleto. Valutare criteri di laboratorio e ecocardiografia.",
            )
        } else {
            (
                "CRITERI NON SODDISFATTI",
                "Malattia di Kawasaki improbabile. Considerare diagnosi alternative.",
            )
        };

        let labs: Vec<&str> = params.laboratory_findings.iter().map(|f| f.label()).collect();
        let echo: Vec<&str> = params
            .echocardiogram_findings
            .iter()
            .map(|f| f.label())
            .collect();

        Ok(CalculationResult::new(
            "Criteri Diagnostici per Malattia di Kawasaki",
            Measure::score("Criteri clinici principali presenti", count).out_of(5),
            Classification::new("Diagnosi", diagnosis).recommending(recommendation),
        )
        .detail("Febbre ≥5 giorni", si_no(params.fever_5_days))
        .detail("Criteri clinici", list_or(&present, "Nessun criterio presente"))
        .detail_if(!labs.is_empty(), "Alterazioni di laboratorio", labs.join(", "))
        .detail_if(!echo.is_empty(), "Reperti ecocardiografici", echo.join(", "))
        .note("Trattamento standard: IVIG 2g/kg in singola dose + ASA (80-100mg/kg/die)")
        .note("Monitoraggio ecocardiografico: alla diagnosi, a 2 settimane e a 6-8 settimane"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(fever: bool, criteria: usize) -> KawasakiParams {
        let on = |i| criteria > i;
        KawasakiParams {
            fever_5_days: fever,
            conjunctival_injection: on(0),
            oral_changes: on(1),
            extremity_changes: on(2),
            polymorphous_rash: on(3),
            cervical_lymphadenopathy: on(4),
            laboratory_findings: vec![],
            echocardiogram_findings: vec![],
        }
    }

    #[test]
    fn test_fever_is_essential() {
        let result = KawasakiCriteriaTool::execute(&with(false, 5)).unwrap();
        assert_eq!(result.classification.label, "CRITERI NON SODDISFATTI");
        assert!(result.classification.recommendation.unwrap().contains("essenziale"));
    }

    #[test]
    fn test_classic_and_incomplete() {
        assert_eq!(
            KawasakiCriteriaTool::execute(&with(true, 4)).unwrap().classification.label,
            "KAWASAKI CLASSICO"
        );
        assert_eq!(
            KawasakiCriteriaTool::execute(&with(true, 2)).unwrap().classification.label,
            "POSSIBILE KAWASAKI INCOMPLETO"
        );
        assert_eq!(
            KawasakiCriteriaTool::execute(&with(true, 1)).unwrap().classification.label,
            "CRITERI NON SODDISFATTI"
        );
    }

    #[test]
    fn test_findings_decode_from_wire_names() {
        let params: KawasakiParams = serde_json::from_value(serde_json::json!({
            "fever_5_days": true,
            "conjunctival_injection": true,
            "oral_changes": true,
            "extremity_changes": false,
            "polymorphous_rash": false,
            "cervical_lymphadenopathy": false,
            "echocardiogram_findings": ["z_score_gt_2"]
        }))
        .unwrap();
        assert_eq!(params.echocardiogram_findings, vec![EchoFinding::ZScoreAbove2]);
        let text = KawasakiCriteriaTool::execute(&params).unwrap().render();
        assert!(text.contains("Reperti ecocardiografici: Z-score coronarico >2"));
    }
}
