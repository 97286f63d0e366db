//! BEARS sleep screening.

use serde::Deserialize;

use super::super::common::Tally;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct PediatricSleepParams {
    pub age_years: f64,
    pub bedtime_problems: bool,
    pub excessive_daytime_sleepiness: bool,
    pub awakenings: bool,
    /// Regular sleep-wake cycle; a problem when false.
    pub regularity: bool,
    pub snoring: bool,
}

pub static BEARS_BANDS: &[Band] = &[
    Band::at_most(0.0, "NORMALE", "Nessun intervento necessario"),
    Band::at_most(
        1.0,
        "DISTURBO LIEVE",
        "Igiene del sonno, rivalutazione al prossimo controllo",
    ),
    Band::at_most(
        2.0,
        "DISTURBO MODERATO",
        "Intervento su igiene del sonno, diario del sonno, follow-up",
    ),
    Band::otherwise(
        "DISTURBO SIGNIFICATIVO",
        "Valutazione approfondita, considerare referral specialistico",
    ),
];

/// Recommended sleep and the usual pattern for age.
fn sleep_norms(age_years: f64) -> (&'static str, &'static str) {
    if age_years < 1.0 {
        (
            "14-15 ore (inclusi sonnellini)",
            "Sonnellini multipli, consolidamento notturno in sviluppo",
        )
    } else if age_years < 3.0 {
        (
            "12-14 ore (incluso sonnellino)",
            "1 sonnellino diurno, 10-12 ore notturne",
        )
    } else if age_years < 6.0 {
        (
            "11-13 ore (alcuni sonnellino)",
            "Sonnellino opzionale, sonno notturno consolidato",
        )
    } else if age_years < 12.0 {
        ("10-11 ore", "Nessun sonnellino, sonno notturno consolidato")
    } else {
        ("8-10 ore", "Pattern sonno-veglia irregolare comune")
    }
}

pub struct PediatricSleepTool;

impl PediatricSleepTool {
    pub const NAME: &'static str = "assess_pediatric_sleep";

    pub const DESCRIPTION: &'static str =
        "Valuta BEARS per screening disturbi del sonno pediatrico";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("age_years", "Età in anni").range(0.0, 18.0),
        ParamSpec::boolean("bedtime_problems", "Problemi di addormentamento"),
        ParamSpec::boolean("excessive_daytime_sleepiness", "Sonnolenza diurna eccessiva"),
        ParamSpec::boolean("awakenings", "Risvegli notturni frequenti"),
        ParamSpec::boolean("regularity", "Regolarità del ciclo sonno-veglia"),
        ParamSpec::boolean("snoring", "Russamento/problemi respiratori"),
    ];

    pub fn execute(params: &PediatricSleepParams) -> Result<CalculationResult, ToolError> {
        let tally = Tally::new()
            .add(params.bedtime_problems, "B - Problemi di addormentamento", 1)
            .add(params.excessive_daytime_sleepiness, "E - Sonnolenza diurna eccessiva", 1)
            .add(params.awakenings, "A - Risvegli notturni", 1)
            .add(!params.regularity, "R - Irregolarità del sonno", 1)
            .add(params.snoring, "S - Russamento/problemi respiratori", 1);
        let band = classify(f64::from(tally.total()), BEARS_BANDS)?;
        let (hours, pattern) = sleep_norms(params.age_years);

        let result = CalculationResult::new(
            "Screening Disturbi del Sonno Pediatrico (BEARS)",
            Measure::score("Problemi identificati", tally.total()).out_of(5),
            Classification::from_band("Valutazione", band),
        )
        .detail("Età", format!("{} anni", params.age_years))
        .detail("Ore di sonno raccomandate", hours)
        .detail("Pattern tipico", pattern);

        Ok(tally
            .itemize(result, "Nessun problema identificato")
            .note_if(params.snoring, "Russamento persistente: valutare OSAS")
            .note("Se ≥3 problemi valutare l'impatto sul funzionamento diurno"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([BEARS_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy(age_years: f64) -> PediatricSleepParams {
        PediatricSleepParams {
            age_years,
            bedtime_problems: false,
            excessive_daytime_sleepiness: false,
            awakenings: false,
            regularity: true,
            snoring: false,
        }
    }

    #[test]
    fn test_irregular_sleep_counts_as_problem() {
        assert_eq!(
            PediatricSleepTool::execute(&healthy(7.0)).unwrap().classification.label,
            "NORMALE"
        );
        let irregular = PediatricSleepParams {
            regularity: false,
            ..healthy(7.0)
        };
        let result = PediatricSleepTool::execute(&irregular).unwrap();
        assert_eq!(result.primary.value, 1.0);
        assert_eq!(result.classification.label, "DISTURBO LIEVE");
    }

    #[test]
    fn test_significant_disturbance_and_norms() {
        let p = PediatricSleepParams {
            bedtime_problems: true,
            awakenings: true,
            snoring: true,
            ..healthy(0.5)
        };
        let result = PediatricSleepTool::execute(&p).unwrap();
        assert_eq!(result.classification.label, "DISTURBO SIGNIFICATIVO");
        assert!(result.render().contains("14-15 ore"));
    }
}
