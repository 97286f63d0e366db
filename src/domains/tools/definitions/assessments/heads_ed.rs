//! HEADS-ED mental health screening for the pediatric emergency department.

use serde::Deserialize;

use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct HeadsEdParams {
    pub home: u32,
    pub education: u32,
    pub activities_peers: u32,
    pub drugs_alcohol: u32,
    pub suicidality: u32,
    pub emotions_behavior: u32,
    pub discharge_resources: u32,
    pub age_years: f64,
}

pub static HEADS_ED_BANDS: &[Band] = &[
    Band::at_most(4.0, "BASSO", "Dimissione con follow-up ambulatoriale"),
    Band::at_most(
        8.0,
        "MODERATO",
        "Consulenza psichiatrica raccomandata, considerare ricovero",
    ),
    Band::otherwise("ALTO", "Consulenza psichiatrica urgente, probabile ricovero"),
];

pub struct HeadsEdTool;

impl HeadsEdTool {
    pub const NAME: &'static str = "assess_heads_ed";

    pub const DESCRIPTION: &'static str =
        "Valuta HEADS-ED per screening rapido salute mentale pediatrica in pronto soccorso";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::integer(
            "home",
            "Home (ambiente familiare): 0=Supportivo/appropriato, 1=Alcune/lievi preoccupazioni, 2=Caos/conflitti maggiori/unsafe",
        )
        .range(0.0, 2.0),
        ParamSpec::integer(
            "education",
            "Education (scuola): 0=Andamento bene/supportiva, 1=Alcuni problemi/assenteismo, 2=Fallimento/sospensioni/non frequenta",
        )
        .range(0.0, 2.0),
        ParamSpec::integer(
            "activities_peers",
            "Activities/Peers (attività/pari): 0=Buone amicizie/attività, 1=Qualche preoccupazione sociale, 2=Isolamento/peer negativi/nessuna attività",
        )
        .range(0.0, 2.0),
        ParamSpec::integer(
            "drugs_alcohol",
            "Drugs/Alcohol (sostanze): 0=Nessun uso, 1=Sperimentazione/uso occasionale, 2=Uso regolare/problematico",
        )
        .range(0.0, 2.0),
        ParamSpec::integer(
            "suicidality",
            "Suicidality (suicidalità): 0=Negata, 1=Ideazione senza piano/intento, 2=Ideazione con piano/intento/comportamenti",
        )
        .range(0.0, 2.0),
        ParamSpec::integer(
            "emotions_behavior",
            "Emotions/Behavior (emozioni/comportamento): 0=Appropriate/stable, 1=Mood/anxiety lievi, 2=Depressione/ansia severe/psicosi/aggressività",
        )
        .range(0.0, 2.0),
        ParamSpec::integer(
            "discharge_resources",
            "Discharge Resources (risorse dimissione): 0=Supporto familiare adeguato/follow-up, 1=Risorse limitate, 2=Nessun supporto/follow-up",
        )
        .range(0.0, 2.0),
        ParamSpec::number("age_years", "Età in anni (validato per 8-18 anni)").range(8.0, 18.0),
    ];

    pub fn execute(params: &HeadsEdParams) -> Result<CalculationResult, ToolError> {
        let items = [
            ("Home (ambiente familiare)", params.home),
            ("Education (scuola)", params.education),
            ("Activities/Peers (attività/pari)", params.activities_peers),
            ("Drugs/Alcohol (sostanze)", params.drugs_alcohol),
            ("Suicidality (suicidalità)", params.suicidality),
            ("Emotions/Behavior (emozioni/comportamento)", params.emotions_behavior),
            ("Discharge resources (risorse alla dimissione)", params.discharge_resources),
        ];
        let total: u32 = items.iter().map(|(_, score)| score).sum();
        let band = classify(f64::from(total), HEADS_ED_BANDS)?;
        let suicide_risk = params.suicidality >= 1;

        let result = CalculationResult::new(
            "HEADS-ED (Screening Salute Mentale Pediatrica PS)",
            Measure::score("Punteggio totale", total).out_of(14),
            Classification::from_band("Livello di rischio", band),
        )
        .secondary(
            Classification::new(
                "Rischio suicidario",
                if suicide_risk { "PRESENTE" } else { "NON RIPORTATO" },
            )
            .recommending(if suicide_risk {
                "Valutazione urgente richiesta"
            } else {
                "Rivalutare a ogni accesso"
            }),
        )
        .detail("Età", format!("{} anni", params.age_years));

        Ok(items
            .into_iter()
            .fold(result, |acc, (label, score)| acc.detail(label, format!("{score}/2")))
            .note_if(
                suicide_risk,
                "ATTENZIONE: rischio suicidario presente, valutazione urgente richiesta",
            )
            .note("Ogni item: 0 nessun problema, 1 lieve, 2 moderato/severo; prioritizzare gli item a 2")
            .note("Non sostituisce la valutazione clinica completa"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([HEADS_ED_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(score: u32, suicidality: u32) -> HeadsEdParams {
        HeadsEdParams {
            home: score,
            education: score,
            activities_peers: score,
            drugs_alcohol: score,
            suicidality,
            emotions_behavior: score,
            discharge_resources: score,
            age_years: 14.0,
        }
    }

    #[test]
    fn test_suicidality_raises_alert_at_low_total() {
        let result = HeadsEdTool::execute(&uniform(0, 1)).unwrap();
        assert_eq!(result.primary.value, 1.0);
        assert_eq!(result.classification.label, "BASSO");
        assert_eq!(result.secondary[0].label, "PRESENTE");
        assert!(result.render().contains("ATTENZIONE"));
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(classify(4.0, HEADS_ED_BANDS).unwrap().label, "BASSO");
        assert_eq!(classify(8.0, HEADS_ED_BANDS).unwrap().label, "MODERATO");
        let result = HeadsEdTool::execute(&uniform(2, 2)).unwrap();
        assert_eq!(result.primary.value, 14.0);
        assert_eq!(result.classification.label, "ALTO");
    }
}
