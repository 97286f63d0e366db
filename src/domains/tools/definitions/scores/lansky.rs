//! Lansky Play-Performance Scale.

use serde::Deserialize;

use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct LanskyParams {
    pub performance_level: u32,
    pub age_months: u32,
}

pub static LANSKY_BANDS: &[Band] = &[
    Band::below(
        30.0,
        "GRAVE",
        "Necessaria assistenza continua, considerare cure palliative/intensive",
    ),
    Band::below(
        50.0,
        "SCARSO",
        "Prevalentemente a letto, valutare necessità di assistenza sanitaria",
    ),
    Band::below(
        70.0,
        "MODERATO",
        "Significative limitazioni nel gioco attivo, valutare supporto domiciliare",
    ),
    Band::below(
        90.0,
        "BUONO",
        "Limitazioni minime, considerare supporto per attività intense",
    ),
    Band::otherwise(
        "OTTIMO",
        "Nessuna restrizione significativa, monitoraggio di routine",
    ),
];

/// Descriptive text for each level of the scale, in steps of ten.
fn level_description(level: u32) -> &'static str {
    match level {
        100 => "Attività normale, nessuna limitazione",
        90 => "Limitazioni minori nelle attività fisiche intense",
        80 => "Attivo, ma si stanca più facilmente",
        70 => "Restrizioni maggiori nel gioco e minore tempo di attività",
        60 => "In piedi, attivo, ma gioco minimo; mantiene se stesso occupato con attività più tranquille",
        50 => "Vestito, nessun gioco attivo, sedentario, in grado di partecipare a tutte le attività calme",
        40 => "Maggior parte del tempo a letto; partecipa ad attività calme",
        30 => "A letto; bisogno di assistenza anche per gioco calmo",
        20 => "Spesso addormentato; gioco limitato ad attività molto passive",
        10 => "Nessun gioco; non si alza dal letto; mantiene attività passive",
        0 => "Non responsivo",
        _ => "Livello non definito",
    }
}

pub struct LanskyScoreTool;

impl LanskyScoreTool {
    pub const NAME: &'static str = "calculate_lansky_score";

    pub const DESCRIPTION: &'static str = "Calcola il Lansky Play-Performance Scale per la valutazione funzionale pediatrica (0-16 anni)";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer(
            "performance_level",
            "Livello funzionale: 100=attività normale, 0=non responsivo (a intervalli di 10)",
        )
        .range(0.0, 100.0)
        .multiple_of(10.0),
        ParamSpec::integer("age_months", "Età in mesi (0-192 mesi = 0-16 anni)").range(0.0, 192.0),
    ];

    pub fn execute(params: &LanskyParams) -> Result<CalculationResult, ToolError> {
        let band = classify(f64::from(params.performance_level), LANSKY_BANDS)?;
        let age_years = f64::from(params.age_months) / 12.0;

        Ok(CalculationResult::new(
            "Lansky Play-Performance Scale",
            Measure::score("Punteggio", params.performance_level).out_of(100),
            Classification::from_band("Stato funzionale", band),
        )
        .detail("Età", format!("{age_years:.1} anni ({} mesi)", params.age_months))
        .detail("Descrizione", level_description(params.performance_level))
        .note("Punteggio <50 indica necessità di assistenza importante")
        .note("Punteggio <30 indica compromissione severa della qualità di vita"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([LANSKY_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_a_description() {
        for level in (0..=100).step_by(10) {
            assert_ne!(level_description(level), "Livello non definito");
        }
    }

    #[test]
    fn test_lansky_status() {
        let result = LanskyScoreTool::execute(&LanskyParams {
            performance_level: 70,
            age_months: 60,
        })
        .unwrap();
        assert_eq!(result.classification.label, "BUONO");
        assert!(result.render().contains("Età: 5.0 anni (60 mesi)"));
        assert_eq!(classify(90.0, LANSKY_BANDS).unwrap().label, "OTTIMO");
        assert_eq!(classify(20.0, LANSKY_BANDS).unwrap().label, "GRAVE");
    }
}
