//! Head circumference against approximate WHO means for age and sex.

use serde::Deserialize;

use crate::domains::formulas::growth::{expected_head_growth_cm_per_month, mean_head_circumference};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{
    Band, CalculationResult, Classification, Measure, classify, round_to,
};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Sex {
    #[serde(rename = "m", alias = "male")]
    Male,
    #[serde(rename = "f", alias = "female")]
    Female,
}

impl Sex {
    fn label(self) -> &'static str {
        match self {
            Self::Male => "maschio",
            Self::Female => "femmina",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadCircumferenceParams {
    pub age_months: u32,
    pub head_circumference_cm: f64,
    pub gender: Sex,
}

/// Bands on the deviation from the mean (cm); one SD is about 1.5 cm.
pub static HEAD_CIRCUMFERENCE_BANDS: &[Band] = &[
    Band::below(-3.0, "MICROCEFALIA", "Valutazione urgente: valutazione genetica e neurologica"),
    Band::below(-1.5, "LIEVEMENTE RIDOTTA", "Monitoraggio seriato"),
    Band::at_most(1.5, "NORMALE", "Proseguire i controlli di routine"),
    Band::at_most(3.0, "LIEVEMENTE AUMENTATA", "Monitoraggio seriato"),
    Band::otherwise(
        "MACROCEFALIA",
        "Valutazione specialistica: ecografia transfontanellare o TC, valutare familiarità",
    ),
];

pub struct HeadCircumferenceTool;

impl HeadCircumferenceTool {
    pub const NAME: &'static str = "calculate_head_circumference_growth";

    pub const DESCRIPTION: &'static str =
        "Valuta crescita circonferenza cranica secondo norme pediatriche";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer("age_months", "Età in mesi (0-60 mesi)").range(0.0, 60.0),
        ParamSpec::number("head_circumference_cm", "Circonferenza cranica in cm")
            .range(25.0, 65.0),
        ParamSpec::choice(
            "gender",
            "Sesso: m/male o f/female",
            &["m", "f", "male", "female"],
        ),
    ];

    pub fn execute(params: &HeadCircumferenceParams) -> Result<CalculationResult, ToolError> {
        let mean = mean_head_circumference(params.age_months, params.gender == Sex::Male);
        let deviation = params.head_circumference_cm - mean;
        let band = classify(deviation, HEAD_CIRCUMFERENCE_BANDS)?;

        Ok(CalculationResult::new(
            "Circonferenza Cranica",
            Measure::quantity("Deviazione dalla media", round_to(deviation, 1), 1, "cm"),
            Classification::from_band("Stato", band),
        )
        .detail("Paziente", format!("{}, {} mesi", params.gender.label(), params.age_months))
        .detail("CC attuale", format!("{} cm", params.head_circumference_cm))
        .detail("Media per età/sesso", format!("{mean:.1} cm"))
        .detail(
            "Velocità di crescita attesa",
            format!("{} cm/mese", expected_head_growth_cm_per_month(params.age_months)),
        )
        .note("Valori medi approssimati dalle curve WHO; DS circa 1.5 cm")
        .note("Misurare sopra le sopracciglia e sull'occipite; prendere la maggiore di 3 misurazioni"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([HEAD_CIRCUMFERENCE_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(age_months: u32, cm: f64, gender: Sex) -> HeadCircumferenceParams {
        HeadCircumferenceParams {
            age_months,
            head_circumference_cm: cm,
            gender,
        }
    }

    #[test]
    fn test_newborn_on_the_mean() {
        let result = HeadCircumferenceTool::execute(&params(0, 34.5, Sex::Male)).unwrap();
        assert_eq!(result.primary.value, 0.0);
        assert_eq!(result.classification.label, "NORMALE");
        assert!(result.render().contains("Velocità di crescita attesa: 2 cm/mese"));
    }

    #[test]
    fn test_deviation_bands() {
        // Female mean at 12 months is 45.5 cm.
        let cases = [
            (44.0, "NORMALE"),
            (43.0, "LIEVEMENTE RIDOTTA"),
            (42.0, "MICROCEFALIA"),
            (48.0, "LIEVEMENTE AUMENTATA"),
            (49.0, "MACROCEFALIA"),
        ];
        for (cm, expected) in cases {
            let result = HeadCircumferenceTool::execute(&params(12, cm, Sex::Female)).unwrap();
            assert_eq!(result.classification.label, expected, "{cm} cm");
        }
    }

    #[test]
    fn test_long_sex_names_are_accepted() {
        let male: HeadCircumferenceParams = serde_json::from_value(serde_json::json!({
            "age_months": 6,
            "head_circumference_cm": 43.0,
            "gender": "male"
        }))
        .unwrap();
        assert_eq!(male.gender, Sex::Male);

        let female: HeadCircumferenceParams = serde_json::from_value(serde_json::json!({
            "age_months": 6,
            "head_circumference_cm": 42.5,
            "gender": "f"
        }))
        .unwrap();
        assert_eq!(female.gender, Sex::Female);
    }
}
