//! Developmental milestone screening by domain.
//!
//! Expected milestones accumulate with age. A domain is of concern when
//! fewer than 70% of its expected milestones have been reached; domains
//! with nothing expected yet are not evaluated.

use serde::Deserialize;

use super::super::common::list_or;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotorSkill {
    HeadControl,
    SitsUnsupported,
    Crawls,
    WalksIndependently,
    Runs,
    Jumps,
    ClimbsStairs,
    RidesTricycle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageSkill {
    RespondsToName,
    Babbles,
    FirstWords,
    TwoWords,
    SimpleSentences,
    FollowsCommands,
    TellsStories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialSkill {
    SmilesSocially,
    StrangerAnxiety,
    ParallelPlay,
    CooperativePlay,
    Empathy,
    SharesToys,
    FollowsRules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveSkill {
    ObjectPermanence,
    CauseEffect,
    SymbolicPlay,
    SortingShapes,
    CountsToTen,
    DrawsPerson,
    UnderstandsTime,
}

/// Milestone expected from the given age in months.
type Schedule<T> = &'static [(u32, T)];

static MOTOR_SCHEDULE: Schedule<MotorSkill> = &[
    (6, MotorSkill::HeadControl),
    (8, MotorSkill::SitsUnsupported),
    (12, MotorSkill::Crawls),
    (12, MotorSkill::WalksIndependently),
    (24, MotorSkill::Runs),
    (24, MotorSkill::Jumps),
    (36, MotorSkill::ClimbsStairs),
    (36, MotorSkill::RidesTricycle),
];

static LANGUAGE_SCHEDULE: Schedule<LanguageSkill> = &[
    (12, LanguageSkill::RespondsToName),
    (12, LanguageSkill::Babbles),
    (12, LanguageSkill::FirstWords),
    (24, LanguageSkill::TwoWords),
    (24, LanguageSkill::FollowsCommands),
    (36, LanguageSkill::SimpleSentences),
    (36, LanguageSkill::TellsStories),
];

static SOCIAL_SCHEDULE: Schedule<SocialSkill> = &[
    (12, SocialSkill::SmilesSocially),
    (12, SocialSkill::StrangerAnxiety),
    (24, SocialSkill::ParallelPlay),
    (36, SocialSkill::CooperativePlay),
    (36, SocialSkill::Empathy),
    (60, SocialSkill::SharesToys),
    (60, SocialSkill::FollowsRules),
];

static COGNITIVE_SCHEDULE: Schedule<CognitiveSkill> = &[
    (12, CognitiveSkill::ObjectPermanence),
    (24, CognitiveSkill::CauseEffect),
    (24, CognitiveSkill::SymbolicPlay),
    (36, CognitiveSkill::SortingShapes),
    (36, CognitiveSkill::DrawsPerson),
    (60, CognitiveSkill::CountsToTen),
    (60, CognitiveSkill::UnderstandsTime),
];

/// Achievement within one domain.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DomainProgress {
    name: &'static str,
    achieved: usize,
    expected: usize,
}

impl DomainProgress {
    fn assess<T: PartialEq + Copy>(
        name: &'static str,
        schedule: Schedule<T>,
        age_months: u32,
        reached: &[T],
    ) -> Option<Self> {
        let expected: Vec<T> = schedule
            .iter()
            .filter(|(from, _)| age_months >= *from)
            .map(|(_, skill)| *skill)
            .collect();
        if expected.is_empty() {
            return None;
        }
        let achieved = expected.iter().filter(|skill| reached.contains(*skill)).count();
        Some(Self {
            name,
            achieved,
            expected: expected.len(),
        })
    }

    fn percent(&self) -> f64 {
        self.achieved as f64 / self.expected as f64 * 100.0
    }

    fn is_concern(&self) -> bool {
        self.percent() < 70.0
    }

    fn summary(&self) -> String {
        format!(
            "{}/{} tappe ({:.0}%)",
            self.achieved,
            self.expected,
            self.percent()
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DevelopmentalMilestonesParams {
    pub age_months: u32,
    pub motor_skills: Vec<MotorSkill>,
    pub language_skills: Vec<LanguageSkill>,
    pub social_skills: Vec<SocialSkill>,
    pub cognitive_skills: Vec<CognitiveSkill>,
}

pub static DEVELOPMENT_BANDS: &[Band] = &[
    Band::at_most(
        0.0,
        "SVILUPPO APPROPRIATO",
        "Sviluppo in linea con l'età cronologica: controlli di routine",
    ),
    Band::at_most(
        1.0,
        "POSSIBILE RITARDO SPECIFICO",
        "Approfondimento specialistico consigliato, valutazione entro 2-3 mesi",
    ),
    Band::otherwise(
        "POSSIBILE RITARDO GLOBALE",
        "Valutazione neuropsichiatrica urgente, riferimento immediato per early intervention",
    ),
];

pub struct DevelopmentalMilestonesTool;

impl DevelopmentalMilestonesTool {
    pub const NAME: &'static str = "assess_developmental_milestones";

    pub const DESCRIPTION: &'static str =
        "Valuta raggiungimento tappe sviluppo psicomotorio per età";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer("age_months", "Età in mesi (0-72 mesi)").range(0.0, 72.0),
        ParamSpec::multi_choice(
            "motor_skills",
            "Abilità motorie raggiunte",
            &[
                "head_control",
                "sits_unsupported",
                "crawls",
                "walks_independently",
                "runs",
                "jumps",
                "climbs_stairs",
                "rides_tricycle",
            ],
        ),
        ParamSpec::multi_choice(
            "language_skills",
            "Abilità linguistiche raggiunte",
            &[
                "responds_to_name",
                "babbles",
                "first_words",
                "two_words",
                "simple_sentences",
                "follows_commands",
                "tells_stories",
            ],
        ),
        ParamSpec::multi_choice(
            "social_skills",
            "Abilità sociali raggiunte",
            &[
                "smiles_socially",
                "stranger_anxiety",
                "parallel_play",
                "cooperative_play",
                "empathy",
                "shares_toys",
                "follows_rules",
            ],
        ),
        ParamSpec::multi_choice(
            "cognitive_skills",
            "Abilità cognitive raggiunte",
            &[
                "object_permanence",
                "cause_effect",
                "symbolic_play",
                "sorting_shapes",
                "counts_to_ten",
                "draws_person",
                "understands_time",
            ],
        ),
    ];

    pub fn execute(params: &DevelopmentalMilestonesParams) -> Result<CalculationResult, ToolError> {
        let age = params.age_months;
        let domains: Vec<DomainProgress> = [
            DomainProgress::assess("Motorio", MOTOR_SCHEDULE, age, &params.motor_skills),
            DomainProgress::assess("Linguaggio", LANGUAGE_SCHEDULE, age, &params.language_skills),
            DomainProgress::assess("Sociale", SOCIAL_SCHEDULE, age, &params.social_skills),
            DomainProgress::assess("Cognitivo", COGNITIVE_SCHEDULE, age, &params.cognitive_skills),
        ]
        .into_iter()
        .flatten()
        .collect();

        let concerns: Vec<&str> = domains
            .iter()
            .filter(|d| d.is_concern())
            .map(|d| d.name)
            .collect();
        let band = classify(concerns.len() as f64, DEVELOPMENT_BANDS)?;

        let result = CalculationResult::new(
            "Valutazione Sviluppo Psicomotorio",
            Measure::score("Domini con possibile ritardo", concerns.len() as u32).out_of(4),
            Classification::from_band("Valutazione globale", band),
        )
        .detail(
            "Età",
            format!("{:.1} anni ({} mesi)", f64::from(age) / 12.0, age),
        )
        .detail("Aree di preoccupazione", list_or(&concerns, "Nessuna"));

        Ok(domains
            .iter()
            .fold(result, |acc, d| acc.detail(d.name, d.summary()))
            .note_if(domains.is_empty(), "Nessuna tappa attesa prima dei 6 mesi in questo schema semplificato")
            .note("Valutazione basata su milestone semplificati: considerare la variabilità individuale")
            .note("Red flags: perdita di abilità acquisite, assenza di linguaggio a 2 anni, comportamenti stereotipati"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([DEVELOPMENT_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(value: serde_json::Value) -> CalculationResult {
        let params: DevelopmentalMilestonesParams = serde_json::from_value(value).unwrap();
        DevelopmentalMilestonesTool::execute(&params).unwrap()
    }

    #[test]
    fn test_on_track_two_year_old() {
        let result = run(json!({
            "age_months": 24,
            "motor_skills": ["head_control", "sits_unsupported", "crawls", "walks_independently", "runs", "jumps"],
            "language_skills": ["responds_to_name", "babbles", "first_words", "two_words", "follows_commands"],
            "social_skills": ["smiles_socially", "stranger_anxiety", "parallel_play"],
            "cognitive_skills": ["object_permanence", "cause_effect", "symbolic_play"]
        }));
        assert_eq!(result.primary.value, 0.0);
        assert_eq!(result.primary.scale_max, Some(4.0));
        assert_eq!(result.classification.label, "SVILUPPO APPROPRIATO");
    }

    #[test]
    fn test_two_domains_behind_is_global() {
        let result = run(json!({
            "age_months": 24,
            "motor_skills": ["head_control", "sits_unsupported", "crawls", "walks_independently", "runs", "jumps"],
            "language_skills": ["babbles"],
            "social_skills": ["smiles_socially"],
            "cognitive_skills": ["object_permanence", "cause_effect", "symbolic_play"]
        }));
        assert_eq!(result.primary.value, 2.0);
        assert_eq!(result.classification.label, "POSSIBILE RITARDO GLOBALE");
    }

    #[test]
    fn test_storytelling_expected_once() {
        let language = DomainProgress::assess(
            "Linguaggio",
            LANGUAGE_SCHEDULE,
            72,
            &[LanguageSkill::TellsStories],
        )
        .unwrap();
        assert_eq!(language.expected, 7);
    }

    #[test]
    fn test_young_infant_has_no_expectations() {
        let result = run(json!({
            "age_months": 3,
            "motor_skills": [], "language_skills": [], "social_skills": [], "cognitive_skills": []
        }));
        assert_eq!(result.classification.label, "SVILUPPO APPROPRIATO");
    }
}
