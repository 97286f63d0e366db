//! Mid-parental target height.

use serde::Deserialize;

use crate::domains::formulas::body::{TARGET_HEIGHT_RANGE_CM, predicted_adult_height};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification, Measure, round_to};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct PredictedHeightParams {
    pub father_height_cm: f64,
    pub mother_height_cm: f64,
    pub is_male: bool,
}

pub struct PredictedHeightTool;

impl PredictedHeightTool {
    pub const NAME: &'static str = "calculate_predicted_height";

    pub const DESCRIPTION: &'static str =
        "Calcola l'altezza predetta finale basata sull'altezza dei genitori";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("father_height_cm", "Altezza del padre in cm").range(140.0, 220.0),
        ParamSpec::number("mother_height_cm", "Altezza della madre in cm").range(140.0, 200.0),
        ParamSpec::boolean("is_male", "Sesso del bambino: True=maschio, False=femmina"),
    ];

    pub fn execute(params: &PredictedHeightParams) -> Result<CalculationResult, ToolError> {
        let predicted = predicted_adult_height(
            params.father_height_cm,
            params.mother_height_cm,
            params.is_male,
        );
        let lower = round_to(predicted - TARGET_HEIGHT_RANGE_CM, 1);
        let upper = round_to(predicted + TARGET_HEIGHT_RANGE_CM, 1);

        Ok(CalculationResult::new(
            "Altezza Predetta Finale",
            Measure::quantity("Altezza predetta", predicted, 1, "cm"),
            Classification::new("Range di confidenza", format!("{lower:.1} - {upper:.1} cm")),
        )
        .detail("Altezza padre", format!("{} cm", params.father_height_cm))
        .detail("Altezza madre", format!("{} cm", params.mother_height_cm))
        .detail("Sesso bambino", if params.is_male { "Maschio" } else { "Femmina" })
        .note("Predizione basata sul potenziale genetico: ±8.5 cm nel 95% dei casi")
        .note("Non considera fattori ambientali, patologie croniche o endocrine"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boy_and_girl_targets() {
        let boy = PredictedHeightTool::execute(&PredictedHeightParams {
            father_height_cm: 180.0,
            mother_height_cm: 165.0,
            is_male: true,
        })
        .unwrap();
        assert_eq!(boy.primary.value, 179.0);
        assert_eq!(boy.classification.label, "170.5 - 187.5 cm");

        let girl = PredictedHeightTool::execute(&PredictedHeightParams {
            father_height_cm: 180.0,
            mother_height_cm: 165.0,
            is_male: false,
        })
        .unwrap();
        assert_eq!(girl.primary.value, 166.0);
    }

    #[test]
    fn test_target_on_a_half_millimetre() {
        let result = PredictedHeightTool::execute(&PredictedHeightParams {
            father_height_cm: 211.7,
            mother_height_cm: 182.0,
            is_male: true,
        })
        .unwrap();
        assert_eq!(result.primary.value, 203.3);
    }
}
