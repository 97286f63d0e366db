//! Weight gain velocity against age-expected gain.

use serde::Deserialize;

use crate::domains::formulas::growth::weight_velocity;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct GrowthVelocityParams {
    pub age_months: u32,
    pub current_weight_kg: f64,
    pub previous_weight_kg: f64,
    pub months_interval: u32,
}

// ============================================================================
// Classification
// ============================================================================

/// Bands on g/day up to 6 months.
pub static INFANT_VELOCITY_BANDS: &[Band] = &[
    Band::below(0.0, "PERDITA DI PESO", "Valutazione urgente"),
    Band::below(15.0, "CRESCITA INADEGUATA", "Monitoraggio stretto"),
    Band::otherwise("CRESCITA ADEGUATA", "Proseguire i controlli di routine"),
];

/// Bands on g/day from 7 to 24 months.
pub static TODDLER_VELOCITY_BANDS: &[Band] = &[
    Band::below(0.0, "PERDITA DI PESO", "Valutazione urgente"),
    Band::below(5.0, "CRESCITA LENTA", "Valutazione nutrizionale"),
    Band::otherwise("CRESCITA ADEGUATA", "Proseguire i controlli di routine"),
];

/// Bands on g/day after 24 months.
pub static CHILD_VELOCITY_BANDS: &[Band] = &[
    Band::below(0.0, "PERDITA DI PESO", "Valutazione urgente"),
    Band::below(3.0, "POSSIBILE RALLENTAMENTO", "Monitoraggio"),
    Band::otherwise("CRESCITA ADEGUATA", "Proseguire i controlli di routine"),
];

fn velocity_bands(age_months: u32) -> &'static [Band] {
    match age_months {
        0..=6 => INFANT_VELOCITY_BANDS,
        7..=24 => TODDLER_VELOCITY_BANDS,
        _ => CHILD_VELOCITY_BANDS,
    }
}

/// Expected gain for age: (per day, per month).
fn expected_gain(age_months: u32) -> (&'static str, &'static str) {
    match age_months {
        0..=3 => ("25-30 g/die", "750-900 g/mese"),
        4..=6 => ("20-25 g/die", "600-750 g/mese"),
        7..=12 => ("10-15 g/die", "300-450 g/mese"),
        13..=24 => ("5-10 g/die", "150-300 g/mese"),
        _ => ("3-8 g/die", "100-250 g/mese"),
    }
}

fn age_label(age_months: u32) -> String {
    let (years, months) = (age_months / 12, age_months % 12);
    if months > 0 {
        format!("{years}a {months}m")
    } else {
        format!("{years} anni")
    }
}

pub struct GrowthVelocityTool;

impl GrowthVelocityTool {
    pub const NAME: &'static str = "assess_growth_velocity";

    pub const DESCRIPTION: &'static str =
        "Valuta velocità di crescita pediatrica secondo curve standard WHO/CDC";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer("age_months", "Età in mesi").range(1.0, 240.0),
        ParamSpec::number("current_weight_kg", "Peso attuale in kg").range(1.0, 150.0),
        ParamSpec::number("previous_weight_kg", "Peso precedente in kg").range(1.0, 150.0),
        ParamSpec::integer("months_interval", "Intervallo tra le misurazioni in mesi")
            .range(1.0, 24.0),
    ];

    pub fn execute(params: &GrowthVelocityParams) -> Result<CalculationResult, ToolError> {
        let velocity = weight_velocity(
            params.current_weight_kg,
            params.previous_weight_kg,
            f64::from(params.months_interval),
        )?;
        let band = classify(velocity.grams_per_day, velocity_bands(params.age_months))?;
        let (per_day, per_month) = expected_gain(params.age_months);

        Ok(CalculationResult::new(
            "Velocità di Crescita Ponderale",
            Measure::quantity("Velocità", velocity.grams_per_day, 1, "g/die"),
            Classification::from_band("Valutazione", band),
        )
        .detail("Età", age_label(params.age_months))
        .detail("Periodo", format!("{} mesi", params.months_interval))
        .detail("Peso precedente", format!("{} kg", params.previous_weight_kg))
        .detail("Peso attuale", format!("{} kg", params.current_weight_kg))
        .detail("Incremento totale", format!("{:+.2} kg", velocity.gain_kg))
        .detail("Mensile", format!("{} g/mese", velocity.grams_per_month))
        .detail("Attesa giornaliera", per_day)
        .detail("Attesa mensile", per_month)
        .note("Red flags: perdita di peso a qualsiasi età, <15 g/die nei primi 6 mesi, <5 g/die tra 6 e 24 mesi")
        .note("Attraversamento di più di 2 linee percentili verso il basso richiede valutazione")
        .note_if(
            band.label != "CRESCITA ADEGUATA",
            "Valutare intake calorico, malassorbimento, patologie organiche e fattori psicosociali",
        ))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([INFANT_VELOCITY_BANDS, TODDLER_VELOCITY_BANDS, CHILD_VELOCITY_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(age_months: u32, previous: f64, current: f64, months: u32) -> GrowthVelocityParams {
        GrowthVelocityParams {
            age_months,
            current_weight_kg: current,
            previous_weight_kg: previous,
            months_interval: months,
        }
    }

    #[test]
    fn test_infant_gaining_well() {
        let result = GrowthVelocityTool::execute(&params(2, 4.0, 4.8, 1)).unwrap();
        assert_eq!(result.primary.value, 26.3);
        assert_eq!(result.classification.label, "CRESCITA ADEGUATA");
        assert!(result.render().contains("Attesa giornaliera: 25-30 g/die"));
    }

    #[test]
    fn test_same_gain_is_inadequate_under_six_months_only() {
        // 0.3 kg over a month is just under 10 g/day.
        let infant = GrowthVelocityTool::execute(&params(5, 7.0, 7.3, 1)).unwrap();
        assert_eq!(infant.classification.label, "CRESCITA INADEGUATA");

        let toddler = GrowthVelocityTool::execute(&params(18, 10.0, 10.3, 1)).unwrap();
        assert_eq!(toddler.classification.label, "CRESCITA ADEGUATA");
    }

    #[test]
    fn test_weight_loss_at_any_age() {
        let result = GrowthVelocityTool::execute(&params(48, 16.0, 15.5, 3)).unwrap();
        assert_eq!(result.classification.label, "PERDITA DI PESO");
        assert!(result.render().contains("Incremento totale: -0.50 kg"));
    }

    #[test]
    fn test_slow_gain_after_two_years() {
        // 0.1 kg over 2 months: 1.6 g/day
        let result = GrowthVelocityTool::execute(&params(36, 14.0, 14.1, 2)).unwrap();
        assert_eq!(result.classification.label, "POSSIBILE RALLENTAMENTO");
        assert!(result.render().contains("Età: 3 anni"));
    }

    #[test]
    fn test_age_label() {
        assert_eq!(age_label(18), "1a 6m");
        assert_eq!(age_label(24), "2 anni");
    }
}
