//! Pediatric nutritional risk screening.

use serde::Deserialize;

use super::super::common::Tally;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct NutritionalStatusParams {
    pub age_months: u32,
    pub recent_weight_loss: bool,
    pub poor_appetite: bool,
    pub feeding_difficulties: bool,
    pub growth_faltering: bool,
    pub muscle_wasting: bool,
    pub subcutaneous_fat_loss: bool,
    pub edema_present: bool,
    pub chronic_disease: bool,
}

pub static NUTRITION_BANDS: &[Band] = &[
    Band::at_most(
        0.0,
        "BASSO RISCHIO",
        "Stato nutrizionale apparentemente adeguato: controlli di routine",
    ),
    Band::at_most(
        2.0,
        "RISCHIO MODERATO",
        "Valutazione nutrizionale dettagliata, follow-up entro 1 mese",
    ),
    Band::at_most(
        4.0,
        "ALTO RISCHIO",
        "Intervento nutrizionale necessario, valutazione specialistica urgente",
    ),
    Band::otherwise(
        "RISCHIO MOLTO ALTO",
        "Malnutrizione probabile: intervento immediato, ricovero per stabilizzazione",
    ),
];

pub struct NutritionalStatusTool;

impl NutritionalStatusTool {
    pub const NAME: &'static str = "assess_nutritional_status";

    pub const DESCRIPTION: &'static str =
        "Valuta lo stato nutrizionale pediatrico con parametri clinici";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer("age_months", "Età in mesi").range(0.0, 216.0),
        ParamSpec::boolean("recent_weight_loss", "Perdita di peso recente (ultimo mese)"),
        ParamSpec::boolean("poor_appetite", "Appetito ridotto persistente"),
        ParamSpec::boolean("feeding_difficulties", "Difficoltà alimentari (suzione, deglutizione)"),
        ParamSpec::boolean("growth_faltering", "Faltering di crescita (crossing percentili)"),
        ParamSpec::boolean("muscle_wasting", "Perdita massa muscolare visibile"),
        ParamSpec::boolean("subcutaneous_fat_loss", "Perdita grasso sottocutaneo"),
        ParamSpec::boolean("edema_present", "Edema presente"),
        ParamSpec::boolean("chronic_disease", "Malattia cronica presente"),
    ];

    pub fn execute(params: &NutritionalStatusParams) -> Result<CalculationResult, ToolError> {
        let tally = Tally::new()
            .add(params.recent_weight_loss, "Perdita di peso recente", 1)
            .add(params.poor_appetite, "Appetito ridotto", 1)
            .add(params.feeding_difficulties, "Difficoltà alimentari", 1)
            .add(params.growth_faltering, "Faltering di crescita", 1)
            .add(params.muscle_wasting, "Perdita massa muscolare", 1)
            .add(params.subcutaneous_fat_loss, "Perdita grasso sottocutaneo", 1)
            .add(params.edema_present, "Edema presente", 1)
            .add(params.chronic_disease, "Malattia cronica", 1);
        let band = classify(f64::from(tally.total()), NUTRITION_BANDS)?;

        let result = CalculationResult::new(
            "Valutazione Stato Nutrizionale Pediatrico",
            Measure::score("Fattori di rischio presenti", tally.total()).out_of(8),
            Classification::from_band("Livello di rischio", band),
        )
        .detail(
            "Età",
            format!(
                "{:.1} anni ({} mesi)",
                f64::from(params.age_months) / 12.0,
                params.age_months
            ),
        );

        Ok(tally
            .itemize(result, "Nessun fattore di rischio identificato")
            .note("Completare con antropometria, curve di crescita, anamnesi alimentare ed esame obiettivo")
            .note("Red flags: perdita >5% del peso in 1 mese, crossing >2 percentili in 6 mesi"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([NUTRITION_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_factors(n: usize) -> NutritionalStatusParams {
        let flags: Vec<bool> = (0..8).map(|i| i < n).collect();
        NutritionalStatusParams {
            age_months: 36,
            recent_weight_loss: flags[0],
            poor_appetite: flags[1],
            feeding_difficulties: flags[2],
            growth_faltering: flags[3],
            muscle_wasting: flags[4],
            subcutaneous_fat_loss: flags[5],
            edema_present: flags[6],
            chronic_disease: flags[7],
        }
    }

    #[test]
    fn test_risk_levels() {
        let label = |n| {
            NutritionalStatusTool::execute(&with_factors(n))
                .unwrap()
                .classification
                .label
        };
        assert_eq!(label(0), "BASSO RISCHIO");
        assert_eq!(label(2), "RISCHIO MODERATO");
        assert_eq!(label(4), "ALTO RISCHIO");
        assert_eq!(label(5), "RISCHIO MOLTO ALTO");
    }
}
