//! M-CHAT (Modified Checklist for Autism in Toddlers).

use serde::Deserialize;

use super::super::common::list_or;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification, Measure};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct MchatParams {
    pub enjoys_swinging: bool,
    pub interest_other_children: bool,
    pub enjoys_climbing: bool,
    pub enjoys_peekaboo: bool,
    pub pretend_play: bool,
    pub points_to_request: bool,
    pub points_to_show_interest: bool,
    pub plays_appropriately_toys: bool,
    pub brings_objects_to_show: bool,
    pub looks_in_eyes: bool,
    pub oversensitive_noise: bool,
    pub smiles_in_response: bool,
    pub imitates_actions: bool,
    pub responds_to_name: bool,
    pub points_at_airplane: bool,
    pub walks_independently: bool,
    pub looks_at_pointed_objects: bool,
    pub unusual_finger_movements: bool,
    pub tries_to_attract_attention: bool,
    pub suspected_hearing_problem: bool,
}

/// One checklist question and how an answer fails it.
struct Item {
    label: &'static str,
    answer: bool,
    /// Reverse items fail when answered yes.
    reverse: bool,
    critical: bool,
}

impl Item {
    fn failed(&self) -> bool {
        self.answer == self.reverse
    }
}

pub const MCHAT_ITEMS: u32 = 20;
pub const MCHAT_CRITICAL_ITEMS: u32 = 6;

fn items(p: &MchatParams) -> [Item; 20] {
    let item = |label, answer, reverse, critical| Item {
        label,
        answer,
        reverse,
        critical,
    };
    [
        item("Godere del dondolo", p.enjoys_swinging, false, false),
        item("Interesse per altri bambini", p.interest_other_children, false, false),
        item("Godere dell'arrampicata", p.enjoys_climbing, false, false),
        item("Godere del cu-cu", p.enjoys_peekaboo, false, false),
        item("Gioco simbolico", p.pretend_play, false, false),
        item("Indicare per richiedere", p.points_to_request, false, false),
        item("Indicare per interesse (*)", p.points_to_show_interest, false, true),
        item("Gioco appropriato con giocattoli", p.plays_appropriately_toys, false, false),
        item("Portare oggetti per mostrare (*)", p.brings_objects_to_show, false, true),
        item("Contatto oculare (*)", p.looks_in_eyes, false, true),
        item("Ipersensibilità ai rumori (inverso)", p.oversensitive_noise, true, false),
        item("Sorriso responsivo", p.smiles_in_response, false, false),
        item("Imitazione", p.imitates_actions, false, false),
        item("Risposta al nome (*)", p.responds_to_name, false, true),
        item("Seguire indicazione (aeroplano)", p.points_at_airplane, false, false),
        item("Cammino indipendente", p.walks_independently, false, false),
        item("Seguire pointing (*)", p.looks_at_pointed_objects, false, true),
        item("Movimenti strani dita (inverso)", p.unusual_finger_movements, true, false),
        item("Ricerca attenzione (*)", p.tries_to_attract_attention, false, true),
        item("Sospetto problema udito (inverso)", p.suspected_hearing_problem, true, false),
    ]
}

pub struct MchatTool;

impl MchatTool {
    pub const NAME: &'static str = "calculate_mchat";

    pub const DESCRIPTION: &'static str =
        "Valuta M-CHAT (Modified Checklist for Autism in Toddlers) per screening autismo";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean("enjoys_swinging", "Il bambino ama dondolarsi/essere fatto saltare sulle ginocchia?"),
        ParamSpec::boolean("interest_other_children", "Il bambino mostra interesse per altri bambini?"),
        ParamSpec::boolean("enjoys_climbing", "Il bambino ama arrampicarsi?"),
        ParamSpec::boolean("enjoys_peekaboo", "Il bambino ama giocare a cu-cu/nascondino?"),
        ParamSpec::boolean("pretend_play", "Il bambino fa giochi di finzione (es. bere da tazza vuota)?"),
        ParamSpec::boolean("points_to_request", "Il bambino usa l'indice per chiedere qualcosa?"),
        ParamSpec::boolean("points_to_show_interest", "Il bambino punta per mostrare interesse?"),
        ParamSpec::boolean("plays_appropriately_toys", "Il bambino gioca appropriatamente con giocattoli piccoli?"),
        ParamSpec::boolean("brings_objects_to_show", "Il bambino porta oggetti per mostrarli?"),
        ParamSpec::boolean("looks_in_eyes", "Il bambino guarda negli occhi per più di 1-2 secondi?"),
        ParamSpec::boolean("oversensitive_noise", "Il bambino sembra ipersensibile ai rumori?"),
        ParamSpec::boolean("smiles_in_response", "Il bambino sorride in risposta al vostro viso/sorriso?"),
        ParamSpec::boolean("imitates_actions", "Il bambino imita le vostre azioni?"),
        ParamSpec::boolean("responds_to_name", "Il bambino risponde quando chiamato per nome?"),
        ParamSpec::boolean("points_at_airplane", "Se puntate un aeroplano nel cielo, il bambino lo guarda?"),
        ParamSpec::boolean("walks_independently", "Il bambino cammina da solo?"),
        ParamSpec::boolean("looks_at_pointed_objects", "Il bambino guarda cose che voi puntate?"),
        ParamSpec::boolean("unusual_finger_movements", "Il bambino fa movimenti strani con le dita vicino agli occhi?"),
        ParamSpec::boolean("tries_to_attract_attention", "Il bambino cerca di attirare la vostra attenzione sulla sua attività?"),
        ParamSpec::boolean("suspected_hearing_problem", "Vi siete mai chiesti se il bambino ha problemi di udito?"),
    ];

    pub fn execute(params: &MchatParams) -> Result<CalculationResult, ToolError> {
        let items = items(params);
        let failed: Vec<&Item> = items.iter().filter(|i| i.failed()).collect();
        let total_failed = failed.len();
        let critical_failed = failed.iter().filter(|i| i.critical).count();

        let (risk, recommendation, follow_up) = if critical_failed >= 2 || total_failed >= 3 {
            (
                "ALTO RISCHIO",
                "Riferimento immediato per valutazione specialistica autismo",
                "Valutazione diagnostica approfondita entro 1 mese",
            )
        } else if total_failed >= 2 {
            (
                "RISCHIO MODERATO",
                "Follow-up M-CHAT a 24 mesi, osservazione clinica",
                "Rivalutazione tra 1-3 mesi",
            )
        } else {
            (
                "BASSO RISCHIO",
                "Sviluppo nella norma, screening di routine",
                "Screening standard ai controlli programmati",
            )
        };

        let labels: Vec<&str> = failed.iter().map(|i| i.label).collect();
        Ok(CalculationResult::new(
            "M-CHAT (Modified Checklist for Autism in Toddlers)",
            Measure::score("Items falliti totali", total_failed as u32).out_of(MCHAT_ITEMS),
            Classification::new("Livello di rischio", risk).recommending(recommendation),
        )
        .detail(
            "Items critici falliti",
            format!("{critical_failed}/{MCHAT_CRITICAL_ITEMS}"),
        )
        .detail("Follow-up", follow_up)
        .detail("Items falliti", list_or(&labels, "Nessun item fallito"))
        .note("Età target: 16-30 mesi")
        .note("(*) = Item critico")
        .note("≥2 item critici falliti O ≥3 item totali: Alto rischio autismo"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typical() -> MchatParams {
        MchatParams {
            enjoys_swinging: true,
            interest_other_children: true,
            enjoys_climbing: true,
            enjoys_peekaboo: true,
            pretend_play: true,
            points_to_request: true,
            points_to_show_interest: true,
            plays_appropriately_toys: true,
            brings_objects_to_show: true,
            looks_in_eyes: true,
            oversensitive_noise: false,
            smiles_in_response: true,
            imitates_actions: true,
            responds_to_name: true,
            points_at_airplane: true,
            walks_independently: true,
            looks_at_pointed_objects: true,
            unusual_finger_movements: false,
            tries_to_attract_attention: true,
            suspected_hearing_problem: false,
        }
    }

    #[test]
    fn test_typical_development_is_low_risk() {
        let result = MchatTool::execute(&typical()).unwrap();
        assert_eq!(result.primary.value, 0.0);
        assert_eq!(result.classification.label, "BASSO RISCHIO");
    }

    #[test]
    fn test_reverse_items_fail_when_present() {
        let p = MchatParams {
            oversensitive_noise: true,
            suspected_hearing_problem: true,
            ..typical()
        };
        let result = MchatTool::execute(&p).unwrap();
        assert_eq!(result.primary.value, 2.0);
        assert_eq!(result.classification.label, "RISCHIO MODERATO");
    }

    #[test]
    fn test_two_critical_failures_are_high_risk() {
        let p = MchatParams {
            looks_in_eyes: false,
            responds_to_name: false,
            ..typical()
        };
        let result = MchatTool::execute(&p).unwrap();
        assert_eq!(result.classification.label, "ALTO RISCHIO");
        assert!(result.render().contains("Items critici falliti: 2/6"));
    }
}
