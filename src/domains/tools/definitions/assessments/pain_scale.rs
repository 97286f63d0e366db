//! Choice of an age- and ability-appropriate pain scale.

use serde::Deserialize;

use super::super::common::list_or;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification, Measure};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveAbility {
    Normal,
    Delayed,
    UnableToCommunicate,
}

impl CognitiveAbility {
    fn label(self) -> &'static str {
        match self {
            Self::Normal => "normali",
            Self::Delayed => "ritardo",
            Self::UnableToCommunicate => "incapace di comunicare",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainType {
    Acute,
    Chronic,
    Postoperative,
}

impl PainType {
    fn label(self) -> &'static str {
        match self {
            Self::Acute => "acuto",
            Self::Chronic => "cronico",
            Self::Postoperative => "post-operatorio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainIndicator {
    Crying,
    FacialExpression,
    BodyPosture,
    Movement,
    VerbalComplaint,
    SleepDisturbance,
    FeedingDifficulty,
}

impl PainIndicator {
    fn label(self) -> &'static str {
        match self {
            Self::Crying => "Pianto",
            Self::FacialExpression => "Espressione facciale",
            Self::BodyPosture => "Postura",
            Self::Movement => "Movimento",
            Self::VerbalComplaint => "Lamento verbale",
            Self::SleepDisturbance => "Disturbi del sonno",
            Self::FeedingDifficulty => "Difficoltà di alimentazione",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PainScaleParams {
    pub age_months: u32,
    pub cognitive_ability: CognitiveAbility,
    pub pain_type: PainType,
    #[serde(default)]
    pub current_pain_indicators: Vec<PainIndicator>,
}

/// Recommended scale and a short description of it.
fn recommend(age_months: u32, ability: CognitiveAbility, pain: PainType) -> (&'static str, &'static str) {
    use CognitiveAbility::*;

    match age_months {
        0..=11 if pain == PainType::Postoperative => (
            "COMFORT-B Scale",
            "Scala comportamentale per neonati post-operatori",
        ),
        0..=11 => (
            "NIPS (Neonatal Infant Pain Scale)",
            "Scala per dolore neonatale/infantile",
        ),
        12..=35 if ability == UnableToCommunicate => (
            "FLACC Scale",
            "Scala comportamentale (Face, Legs, Activity, Cry, Consolability)",
        ),
        12..=35 => (
            "FLACC Scale o Wong-Baker FACES",
            "FLACC per osservazione, FACES se collaborativo",
        ),
        36..=83 if ability == UnableToCommunicate => (
            "FLACC Scale",
            "Scala comportamentale per bambini non comunicativi",
        ),
        36..=83 => (
            "Wong-Baker FACES Pain Scale",
            "Scala con faccine adatta per bambini",
        ),
        _ => match ability {
            Normal => (
                "NRS (Numeric Rating Scale) 0-10",
                "Scala numerica per bambini e adolescenti",
            ),
            Delayed => (
                "Wong-Baker FACES Pain Scale",
                "Scala con faccine, più comprensibile",
            ),
            UnableToCommunicate => (
                "FLACC Scale modificata",
                "Scala comportamentale per non comunicativi",
            ),
        },
    }
}

pub struct PainScaleTool;

impl PainScaleTool {
    pub const NAME: &'static str = "assess_pain_scale";

    pub const DESCRIPTION: &'static str =
        "Raccomanda la scala del dolore più appropriata basata su età e capacità comunicative";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer("age_months", "Età in mesi (0-216 mesi = 0-18 anni)").range(0.0, 216.0),
        ParamSpec::choice(
            "cognitive_ability",
            "Capacità cognitive: normal, delayed, unable_to_communicate",
            &["normal", "delayed", "unable_to_communicate"],
        ),
        ParamSpec::choice(
            "pain_type",
            "Tipo di dolore: acute, chronic, postoperative",
            &["acute", "chronic", "postoperative"],
        ),
        ParamSpec::multi_choice(
            "current_pain_indicators",
            "Indicatori di dolore presenti",
            &[
                "crying",
                "facial_expression",
                "body_posture",
                "movement",
                "verbal_complaint",
                "sleep_disturbance",
                "feeding_difficulty",
            ],
        )
        .optional(),
    ];

    pub fn execute(params: &PainScaleParams) -> Result<CalculationResult, ToolError> {
        let (scale, description) =
            recommend(params.age_months, params.cognitive_ability, params.pain_type);

        let mut indicators: Vec<PainIndicator> = Vec::new();
        for indicator in &params.current_pain_indicators {
            if !indicators.contains(indicator) {
                indicators.push(*indicator);
            }
        }
        let labels: Vec<&str> = indicators.iter().map(|i| i.label()).collect();

        Ok(CalculationResult::new(
            "Raccomandazione Scala del Dolore",
            Measure::score("Indicatori di dolore presenti", labels.len() as u32).out_of(7),
            Classification::new("Scala raccomandata", scale).recommending(description),
        )
        .detail(
            "Paziente",
            format!(
                "{:.1} anni ({} mesi)",
                f64::from(params.age_months) / 12.0,
                params.age_months
            ),
        )
        .detail("Capacità cognitive", params.cognitive_ability.label())
        .detail("Tipo di dolore", params.pain_type.label())
        .detail("Indicatori osservati", list_or(&labels, "Nessuno riportato"))
        .note_if(
            params.pain_type == PainType::Chronic,
            "Dolore cronico: valutazione multidimensionale, considerare PedsQL per la qualità di vita",
        )
        .note_if(
            params.pain_type == PainType::Postoperative,
            "Post-operatorio: valutazione frequente nelle prime 24-48h, a riposo e durante il movimento",
        )
        .note_if(
            params.age_months < 6,
            "Nei neonati pretermine usare scale specifiche (PIPP)",
        )
        .note("Obiettivi: dolore acuto <4/10, procedurale <6/10, cronico orientato a funzionalità e qualità di vita"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(age_months: u32, ability: CognitiveAbility, pain: PainType) -> String {
        PainScaleTool::execute(&PainScaleParams {
            age_months,
            cognitive_ability: ability,
            pain_type: pain,
            current_pain_indicators: vec![],
        })
        .unwrap()
        .classification
        .label
    }

    #[test]
    fn test_scale_by_age_band() {
        use CognitiveAbility::*;
        assert_eq!(scale(6, Normal, PainType::Acute), "NIPS (Neonatal Infant Pain Scale)");
        assert_eq!(scale(6, Normal, PainType::Postoperative), "COMFORT-B Scale");
        assert_eq!(scale(24, UnableToCommunicate, PainType::Acute), "FLACC Scale");
        assert_eq!(scale(48, Delayed, PainType::Acute), "Wong-Baker FACES Pain Scale");
        assert_eq!(scale(84, Normal, PainType::Chronic), "NRS (Numeric Rating Scale) 0-10");
        assert_eq!(scale(120, UnableToCommunicate, PainType::Acute), "FLACC Scale modificata");
    }

    #[test]
    fn test_indicators_are_counted_once() {
        let result = PainScaleTool::execute(&PainScaleParams {
            age_months: 30,
            cognitive_ability: CognitiveAbility::Normal,
            pain_type: PainType::Acute,
            current_pain_indicators: vec![PainIndicator::Crying, PainIndicator::Crying],
        })
        .unwrap();
        assert_eq!(result.primary.value, 1.0);
    }
}
