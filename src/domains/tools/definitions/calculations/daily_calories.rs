//! Daily caloric requirement by age.

use serde::Deserialize;

use crate::domains::formulas::fluids::daily_calories;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification, Measure, round_to};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct DailyCaloriesParams {
    pub weight_kg: f64,
    pub age_months: u32,
}

const PROTEIN_G_PER_KG: f64 = 1.2;
const FAT_PERCENT: u32 = 30;
const CARBOHYDRATE_PERCENT: u32 = 50;

fn age_band(age_months: u32) -> &'static str {
    match age_months {
        0..=11 => "0-12 mesi",
        12..=35 => "1-3 anni",
        36..=119 => "3-10 anni",
        _ => ">10 anni",
    }
}

pub struct DailyCaloriesTool;

impl DailyCaloriesTool {
    pub const NAME: &'static str = "calculate_daily_calories";

    pub const DESCRIPTION: &'static str = "Calcola fabbisogno calorico giornaliero pediatrico";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("weight_kg", "Peso in kg").range(1.0, 100.0),
        ParamSpec::integer("age_months", "Età in mesi").range(0.0, 216.0),
    ];

    pub fn execute(params: &DailyCaloriesParams) -> Result<CalculationResult, ToolError> {
        let need = daily_calories(params.weight_kg, f64::from(params.age_months))?;
        let protein_g = round_to(params.weight_kg * PROTEIN_G_PER_KG, 0);

        Ok(CalculationResult::new(
            "Fabbisogno Calorico Pediatrico",
            Measure::quantity("Totale giornaliero", need.daily_kcal, 0, "kcal/die"),
            Classification::new("Fascia di età", age_band(params.age_months))
                .recommending(format!("{} kcal/kg/die", need.kcal_per_kg)),
        )
        .detail(
            "Età",
            format!(
                "{:.1} anni ({} mesi)",
                f64::from(params.age_months) / 12.0,
                params.age_months
            ),
        )
        .detail("Peso", format!("{} kg", params.weight_kg))
        .detail("Per kg di peso", format!("{} kcal/kg/die", need.kcal_per_kg))
        .detail("Proteine", format!("{protein_g}g/die (~15% delle calorie)"))
        .detail("Grassi", format!("~{FAT_PERCENT}% delle calorie"))
        .detail("Carboidrati", format!("~{CARBOHYDRATE_PERCENT}% delle calorie"))
        .note("Aumentare del 10-15% in caso di febbre, del 20-50% in malattie acute")
        .note("Personalizzare per attività fisica e crescita"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toddler_requirement() {
        let result = DailyCaloriesTool::execute(&DailyCaloriesParams {
            weight_kg: 12.0,
            age_months: 24,
        })
        .unwrap();
        assert_eq!(result.primary.value, 1200.0);
        assert_eq!(result.classification.label, "1-3 anni");
        assert!(result.render().contains("Proteine: 14g/die"));
    }

    #[test]
    fn test_adolescent_requirement() {
        let result = DailyCaloriesTool::execute(&DailyCaloriesParams {
            weight_kg: 50.0,
            age_months: 180,
        })
        .unwrap();
        assert_eq!(result.primary.value, 2750.0);
        assert_eq!(result.classification.recommendation.as_deref(), Some("55 kcal/kg/die"));
    }
}
