//! Pediatric asthma control over recent weeks.

use serde::Deserialize;

use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLimitation {
    None,
    Minor,
    Moderate,
    Severe,
}

impl ActivityLimitation {
    fn points(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Minor => 1,
            Self::Moderate => 2,
            Self::Severe => 3,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::None => "nessuna",
            Self::Minor => "lieve",
            Self::Moderate => "moderata",
            Self::Severe => "severa",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AsthmaControlParams {
    pub daytime_symptoms_per_week: u32,
    pub nighttime_awakenings_per_month: u32,
    pub rescue_inhaler_use_per_week: u32,
    pub activity_limitation: ActivityLimitation,
    pub school_absences_asthma: u32,
    pub recent_exacerbations: u32,
}

/// 0 for none, 1 for up to `low`, 2 beyond.
fn frequency_points(count: u32, low: u32) -> u32 {
    match count {
        0 => 0,
        n if n <= low => 1,
        _ => 2,
    }
}

pub static ASTHMA_CONTROL_BANDS: &[Band] = &[
    Band::at_most(
        2.0,
        "BEN CONTROLLATO",
        "Zona verde: mantenere terapia attuale, controllo tra 3-6 mesi",
    ),
    Band::at_most(
        6.0,
        "PARZIALMENTE CONTROLLATO",
        "Zona gialla: considerare step-up terapeutico, rivalutazione entro 1-2 mesi",
    ),
    Band::otherwise(
        "NON CONTROLLATO",
        "Zona rossa: step-up terapeutico necessario, controllo entro 2-4 settimane",
    ),
];

pub struct AsthmaControlTool;

impl AsthmaControlTool {
    pub const NAME: &'static str = "assess_asthma_control";

    pub const DESCRIPTION: &'static str = "Valuta controllo asma pediatrico usando parametri clinici";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer(
            "daytime_symptoms_per_week",
            "Giorni con sintomi diurni nell'ultima settimana",
        )
        .range(0.0, 7.0),
        ParamSpec::integer(
            "nighttime_awakenings_per_month",
            "Risvegli notturni per asma nell'ultimo mese",
        )
        .range(0.0, 30.0),
        ParamSpec::integer(
            "rescue_inhaler_use_per_week",
            "Utilizzi broncodilatatore al bisogno per settimana",
        )
        .range(0.0, 50.0),
        ParamSpec::choice(
            "activity_limitation",
            "Limitazione attività: none, minor, moderate, severe",
            &["none", "minor", "moderate", "severe"],
        ),
        ParamSpec::integer(
            "school_absences_asthma",
            "Giorni assenza scuola per asma (ultimo mese)",
        )
        .range(0.0, 30.0),
        ParamSpec::integer("recent_exacerbations", "Riacutizzazioni ultime 4 settimane")
            .range(0.0, 10.0),
    ];

    pub fn execute(params: &AsthmaControlParams) -> Result<CalculationResult, ToolError> {
        let components = [
            (
                "Sintomi diurni",
                format!("{}/7 giorni per settimana", params.daytime_symptoms_per_week),
                frequency_points(params.daytime_symptoms_per_week, 2),
            ),
            (
                "Risvegli notturni",
                format!("{}/mese", params.nighttime_awakenings_per_month),
                frequency_points(params.nighttime_awakenings_per_month, 2),
            ),
            (
                "Uso broncodilatatore",
                format!("{}/settimana", params.rescue_inhaler_use_per_week),
                frequency_points(params.rescue_inhaler_use_per_week, 2),
            ),
            (
                "Limitazione attività",
                params.activity_limitation.label().to_string(),
                params.activity_limitation.points(),
            ),
            (
                "Assenze scolastiche",
                format!("{}/mese", params.school_absences_asthma),
                frequency_points(params.school_absences_asthma, 2),
            ),
            (
                "Riacutizzazioni recenti",
                format!("{} nelle ultime 4 settimane", params.recent_exacerbations),
                frequency_points(params.recent_exacerbations, 1),
            ),
        ];

        let score: u32 = components.iter().map(|(_, _, points)| points).sum();
        let band = classify(f64::from(score), ASTHMA_CONTROL_BANDS)?;

        let result = CalculationResult::new(
            "Valutazione Controllo Asma Pediatrico",
            Measure::score("Punteggio controllo", score).out_of(13),
            Classification::from_band("Livello di controllo", band),
        );

        Ok(components
            .into_iter()
            .fold(result, |acc, (label, value, points)| {
                acc.detail(label, format!("{value} ({points} punti)"))
            })
            .note("Controllo ottimale: sintomi e broncodilatatore ≤2 giorni/settimana, risvegli ≤2/mese, nessuna limitazione né riacutizzazione")
            .note("Prima di modificare la terapia verificare tecnica inalatoria, aderenza e trigger ambientali"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([ASTHMA_CONTROL_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(symptoms: u32, exacerbations: u32, limitation: ActivityLimitation) -> AsthmaControlParams {
        AsthmaControlParams {
            daytime_symptoms_per_week: symptoms,
            nighttime_awakenings_per_month: 0,
            rescue_inhaler_use_per_week: symptoms,
            activity_limitation: limitation,
            school_absences_asthma: 0,
            recent_exacerbations: exacerbations,
        }
    }

    #[test]
    fn test_well_controlled() {
        let result = AsthmaControlTool::execute(&params(2, 0, ActivityLimitation::None)).unwrap();
        assert_eq!(result.primary.value, 2.0);
        assert_eq!(result.classification.label, "BEN CONTROLLATO");
    }

    #[test]
    fn test_exacerbations_score_two_from_second() {
        assert_eq!(frequency_points(1, 1), 1);
        assert_eq!(frequency_points(2, 1), 2);
        let result = AsthmaControlTool::execute(&params(5, 2, ActivityLimitation::Severe)).unwrap();
        // 2 + 2 + 3 + 2
        assert_eq!(result.primary.value, 9.0);
        assert_eq!(result.classification.label, "NON CONTROLLATO");
    }
}
