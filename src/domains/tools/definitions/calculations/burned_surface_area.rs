//! Burned body surface by Lund-Browder, with Parkland resuscitation volume.

use serde::Deserialize;

use crate::domains::formulas::body::{BurnedRegions, burned_tbsa};
use crate::domains::formulas::fluids::parkland;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct BurnedSurfaceAreaParams {
    pub age_years: f64,
    #[serde(default)]
    pub weight_kg: f64,
    #[serde(default)]
    pub head_percent: f64,
    #[serde(default)]
    pub trunk_percent: f64,
    #[serde(default)]
    pub arms_percent: f64,
    #[serde(default)]
    pub hands_percent: f64,
    #[serde(default)]
    pub legs_percent: f64,
    #[serde(default)]
    pub feet_percent: f64,
    #[serde(default)]
    pub genitals_percent: f64,
}

impl BurnedSurfaceAreaParams {
    fn regions(&self) -> BurnedRegions {
        BurnedRegions {
            head: self.head_percent,
            trunk: self.trunk_percent,
            arms: self.arms_percent,
            hands: self.hands_percent,
            legs: self.legs_percent,
            feet: self.feet_percent,
            genitals: self.genitals_percent,
        }
    }
}

pub static BURN_EXTENT_BANDS: &[Band] = &[
    Band::at_most(
        10.0,
        "USTIONE LIMITATA",
        "Reidratazione orale se tollerata, medicazione e rivalutazione",
    ),
    Band::at_most(
        15.0,
        "USTIONE ESTESA",
        "Reidratazione endovenosa secondo Parkland",
    ),
    Band::at_most(
        20.0,
        "USTIONE ESTESA - RICOVERO",
        "Ricovero, reidratazione endovenosa, monitoraggio diuresi",
    ),
    Band::otherwise(
        "USTIONE GRAVE - RISCHIO SHOCK",
        "Centro ustioni, reidratazione aggressiva, valutare escarotomie oltre il 30%",
    ),
];

pub struct BurnedSurfaceAreaTool;

impl BurnedSurfaceAreaTool {
    pub const NAME: &'static str = "calculate_burned_surface_area";

    pub const DESCRIPTION: &'static str = "Calcola la superficie corporea ustionata secondo Lund-Browder modificata per età pediatrica";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("age_years", "Età in anni").range(0.0, 18.0),
        ParamSpec::number("weight_kg", "Peso in kg (opzionale, per calcolo fluidi)")
            .range(0.0, 100.0)
            .optional(),
        ParamSpec::number("head_percent", "Percentuale di ustione della testa/collo (0-100%)")
            .range(0.0, 100.0)
            .default_number(0.0),
        ParamSpec::number("trunk_percent", "Percentuale di ustione del tronco (0-100%)")
            .range(0.0, 100.0)
            .default_number(0.0),
        ParamSpec::number("arms_percent", "Percentuale di ustione delle braccia (0-100%)")
            .range(0.0, 100.0)
            .default_number(0.0),
        ParamSpec::number("hands_percent", "Percentuale di ustione delle mani (0-100%)")
            .range(0.0, 100.0)
            .default_number(0.0),
        ParamSpec::number("legs_percent", "Percentuale di ustione delle gambe (0-100%)")
            .range(0.0, 100.0)
            .default_number(0.0),
        ParamSpec::number("feet_percent", "Percentuale di ustione dei piedi (0-100%)")
            .range(0.0, 100.0)
            .default_number(0.0),
        ParamSpec::number("genitals_percent", "Percentuale di ustione dei genitali (0-100%)")
            .range(0.0, 100.0)
            .default_number(0.0),
    ];

    pub fn execute(params: &BurnedSurfaceAreaParams) -> Result<CalculationResult, ToolError> {
        let tbsa = burned_tbsa(params.age_years, &params.regions());
        let band = classify(tbsa, BURN_EXTENT_BANDS)?;

        let fluids = if params.weight_kg > 0.0 {
            match parkland(params.weight_kg, tbsa)? {
                Some(volume) => format!(
                    "totale 24h {:.0} ml; prime 8h {:.0} ml; seconde 8h {:.0} ml; terze 8h {:.0} ml",
                    volume.total_ml, volume.first_8h_ml, volume.later_8h_ml, volume.later_8h_ml
                ),
                None => "Non indicato (TBSA ≤10%)".to_string(),
            }
        } else {
            "Non calcolabile (peso non fornito)".to_string()
        };

        let transfer_threshold = if params.age_years < 10.0 { 10.0 } else { 15.0 };

        Ok(CalculationResult::new(
            "Valutazione Superficie Corporea Ustionata",
            Measure::quantity("TBSA totale", tbsa, 1, "%"),
            Classification::from_band("Estensione", band),
        )
        .secondary(Classification::new(
            "Trasferimento a centro ustioni",
            if tbsa > transfer_threshold { "INDICATO" } else { "DA VALUTARE" },
        ))
        .detail("Età", format!("{} anni", params.age_years))
        .detail("Testa/collo", format!("{}%", params.head_percent))
        .detail("Tronco", format!("{}%", params.trunk_percent))
        .detail("Braccia", format!("{}%", params.arms_percent))
        .detail("Mani", format!("{}%", params.hands_percent))
        .detail("Gambe", format!("{}%", params.legs_percent))
        .detail("Piedi", format!("{}%", params.feet_percent))
        .detail("Genitali", format!("{}%", params.genitals_percent))
        .detail("Fabbisogno idrico (Parkland modificato)", fluids)
        .note("Formula Parkland pediatrica: 3 ml × kg × %TBSA")
        .note("Trasferimento: TBSA >10% sotto i 10 anni, >15% oltre; ustioni III grado >5%; mani, viso, genitali, articolazioni; ustioni elettriche"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([BURN_EXTENT_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(age_years: f64, weight_kg: f64) -> BurnedSurfaceAreaParams {
        BurnedSurfaceAreaParams {
            age_years,
            weight_kg,
            head_percent: 0.0,
            trunk_percent: 0.0,
            arms_percent: 0.0,
            hands_percent: 0.0,
            legs_percent: 0.0,
            feet_percent: 0.0,
            genitals_percent: 0.0,
        }
    }

    #[test]
    fn test_nothing_burned() {
        let result = BurnedSurfaceAreaTool::execute(&params(3.0, 0.0)).unwrap();
        assert_eq!(result.primary.value, 0.0);
        assert!(result.render().contains("Non calcolabile (peso non fornito)"));
    }

    #[test]
    fn test_parkland_above_ten_percent() {
        // Whole trunk of a 6 year old: 32% TBSA.
        let p = BurnedSurfaceAreaParams {
            trunk_percent: 100.0,
            ..params(6.0, 20.0)
        };
        let result = BurnedSurfaceAreaTool::execute(&p).unwrap();
        assert_eq!(result.primary.value, 32.0);
        assert_eq!(result.classification.label, "USTIONE GRAVE - RISCHIO SHOCK");
        assert_eq!(result.secondary[0].label, "INDICATO");
        assert!(result.render().contains("totale 24h 1920 ml; prime 8h 960 ml; seconde 8h 480 ml"));
    }

    #[test]
    fn test_no_parkland_for_small_burns() {
        // Hands and genitals: 5% + 1%.
        let p = BurnedSurfaceAreaParams {
            hands_percent: 100.0,
            genitals_percent: 100.0,
            ..params(2.0, 12.0)
        };
        let result = BurnedSurfaceAreaTool::execute(&p).unwrap();
        assert_eq!(result.primary.value, 6.0);
        assert!(result.render().contains("Non indicato"));
    }
}
