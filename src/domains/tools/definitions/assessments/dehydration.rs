//! Clinical dehydration grading (WHO/UNICEF).

use serde::Deserialize;

use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

/// One graded sign: 0 normal, 1 some dehydration, 2 severe.
trait Sign: Copy {
    const LABEL: &'static str;
    fn points(self) -> u32;
    fn describe(self) -> &'static str;
}

macro_rules! graded_sign {
    ($name:ident, $label:literal, [$normal:ident => $n:literal, $some:ident => $s:literal, $severe:ident => $v:literal]) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $normal,
            $some,
            $severe,
        }

        impl Sign for $name {
            const LABEL: &'static str = $label;

            fn points(self) -> u32 {
                match self {
                    Self::$normal => 0,
                    Self::$some => 1,
                    Self::$severe => 2,
                }
            }

            fn describe(self) -> &'static str {
                match self {
                    Self::$normal => $n,
                    Self::$some => $s,
                    Self::$severe => $v,
                }
            }
        }
    };
}

graded_sign!(Appearance, "Aspetto generale", [
    Normal => "normale",
    RestlessThirsty => "irrequieto, assetato",
    LethargicUnconscious => "letargico o incosciente"
]);
graded_sign!(Eyes, "Occhi", [
    Normal => "normali",
    SlightlySunken => "lievemente infossati",
    VerySunken => "molto infossati"
]);
graded_sign!(Tears, "Lacrime", [
    Present => "presenti",
    Decreased => "ridotte",
    Absent => "assenti"
]);
graded_sign!(MouthTongue, "Bocca e lingua", [
    Moist => "umide",
    Sticky => "appiccicose",
    Dry => "secche"
]);
graded_sign!(Thirst, "Sete", [
    DrinksNormal => "beve normalmente",
    EagerToDrink => "beve avidamente",
    UnableToDrink => "incapace di bere"
]);
graded_sign!(SkinPinch, "Pinch test", [
    Normal => "normale (<2 sec)",
    Slow => "lento (2-3 sec)",
    VerySlow => "molto lento (>3 sec)"
]);

#[derive(Debug, Clone, Deserialize)]
pub struct DehydrationParams {
    pub general_appearance: Appearance,
    pub eyes: Eyes,
    pub tears: Tears,
    pub mouth_tongue: MouthTongue,
    pub thirst: Thirst,
    pub skin_pinch: SkinPinch,
    pub age_months: u32,
}

pub static DEHYDRATION_BANDS: &[Band] = &[
    Band::at_most(
        2.0,
        "NESSUNA o LIEVE",
        "Piano A - Trattamento domiciliare: soluzioni orali, allattamento al seno, alimentazione normale",
    ),
    Band::at_most(
        6.0,
        "MODERATA",
        "Piano B - Reidratazione orale: SRO 75 ml/kg in 4 ore",
    ),
    Band::otherwise(
        "SEVERA",
        "Piano C - Reidratazione endovenosa immediata, ricovero ospedaliero",
    ),
];

fn estimated_loss(score: u32) -> &'static str {
    match score {
        0..=2 => "<3%",
        3..=6 => "3-9%",
        _ => ">9%",
    }
}

fn graded<S: Sign>(sign: S) -> (&'static str, String) {
    (
        S::LABEL,
        format!("{} ({} punti)", sign.describe(), sign.points()),
    )
}

pub struct DehydrationTool;

impl DehydrationTool {
    pub const NAME: &'static str = "assess_dehydration";

    pub const DESCRIPTION: &'static str =
        "Valuta il grado di disidratazione nel bambino usando parametri clinici";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::choice(
            "general_appearance",
            "Aspetto generale: normal, restless_thirsty, lethargic_unconscious",
            &["normal", "restless_thirsty", "lethargic_unconscious"],
        ),
        ParamSpec::choice(
            "eyes",
            "Occhi: normal, slightly_sunken, very_sunken",
            &["normal", "slightly_sunken", "very_sunken"],
        ),
        ParamSpec::choice(
            "tears",
            "Lacrime: present, decreased, absent",
            &["present", "decreased", "absent"],
        ),
        ParamSpec::choice(
            "mouth_tongue",
            "Bocca e lingua: moist, sticky, dry",
            &["moist", "sticky", "dry"],
        ),
        ParamSpec::choice(
            "thirst",
            "Sete: drinks_normal, eager_to_drink, unable_to_drink",
            &["drinks_normal", "eager_to_drink", "unable_to_drink"],
        ),
        ParamSpec::choice(
            "skin_pinch",
            "Pinch test: normal (<2sec), slow (2-3sec), very_slow (>3sec)",
            &["normal", "slow", "very_slow"],
        ),
        ParamSpec::integer("age_months", "Età in mesi (0-216 mesi = 0-18 anni)").range(0.0, 216.0),
    ];

    pub fn execute(params: &DehydrationParams) -> Result<CalculationResult, ToolError> {
        let signs = [
            graded(params.general_appearance),
            graded(params.eyes),
            graded(params.tears),
            graded(params.mouth_tongue),
            graded(params.thirst),
            graded(params.skin_pinch),
        ];
        let score = params.general_appearance.points()
            + params.eyes.points()
            + params.tears.points()
            + params.mouth_tongue.points()
            + params.thirst.points()
            + params.skin_pinch.points();
        let band = classify(f64::from(score), DEHYDRATION_BANDS)?;

        let result = CalculationResult::new(
            "Valutazione Disidratazione (WHO/UNICEF)",
            Measure::score("Punteggio totale", score).out_of(12),
            Classification::from_band("Grado di disidratazione", band),
        )
        .detail("Età paziente", format!("{} mesi", params.age_months))
        .detail("Perdita di fluidi stimata", estimated_loss(score));

        Ok(signs
            .into_iter()
            .fold(result, |acc, (label, value)| acc.detail(label, value))
            .note_if(
                params.age_months < 6,
                "Nei lattanti <6 mesi la disidratazione può essere più severa",
            )
            .note("Rivalutare ogni 2-4 ore durante il trattamento")
            .note("Ospedalizzare se vomito persistente, diarrea profusa (>10 scariche/die) o segni di shock"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([DEHYDRATION_BANDS])
    }
}
