//! Revised Jones criteria (AHA 2015) for acute rheumatic fever.

use serde::Deserialize;

use super::super::common::list_or;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification, Measure, si_no};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MajorCriterion {
    Carditis,
    Arthritis,
    Chorea,
    ErythemaMarginatum,
    SubcutaneousNodules,
    SubclinicalCarditis,
    Polyarthralgia,
}

impl MajorCriterion {
    fn label(self) -> &'static str {
        match self {
            Self::Carditis => "Cardite",
            Self::Arthritis => "Artrite",
            Self::Chorea => "Corea",
            Self::ErythemaMarginatum => "Eritema marginato",
            Self::SubcutaneousNodules => "Noduli sottocutanei",
            Self::SubclinicalCarditis => "Cardite subclinica",
            Self::Polyarthralgia => "Poliartralgia",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinorCriterion {
    Fever,
    ElevatedEsrCrp,
    ProlongedPrInterval,
    Polyarthralgia,
    Monoarthralgia,
}

impl MinorCriterion {
    fn label(self) -> &'static str {
        match self {
            Self::Fever => "Febbre",
            Self::ElevatedEsrCrp => "VES/PCR elevata",
            Self::ProlongedPrInterval => "PR prolungato",
            Self::Polyarthralgia => "Poliartralgia",
            Self::Monoarthralgia => "Monoartralgia",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JonesParams {
    pub prior_rheumatic_heart_disease: bool,
    pub high_risk_population: bool,
    pub confirmed_strep_infection: bool,
    pub major_criteria: Vec<MajorCriterion>,
    pub minor_criteria: Vec<MinorCriterion>,
}

/// Distinct criteria that count for the population.
///
/// Polyarthralgia (major) and monoarthralgia (minor) only count in
/// high-risk populations.
fn counted<T: Copy + Ord>(items: &[T], excluded: Option<T>) -> Vec<T> {
    let mut kept: Vec<T> = items
        .iter()
        .copied()
        .filter(|c| Some(*c) != excluded)
        .collect();
    kept.sort();
    kept.dedup();
    kept
}

pub struct JonesCriteriaTool;

impl JonesCriteriaTool {
    pub const NAME: &'static str = "calculate_jones_criteria";

    pub const DESCRIPTION: &'static str =
        "Valuta i criteri di Jones aggiornati (2015) per la diagnosi di febbre reumatica acuta";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::boolean("prior_rheumatic_heart_disease", "Precedente cardiopatia reumatica"),
        ParamSpec::boolean(
            "high_risk_population",
            "Popolazione ad alto rischio (endemicità elevata)",
        ),
        ParamSpec::boolean(
            "confirmed_strep_infection",
            "Infezione streptococcica recente confermata",
        ),
        ParamSpec::multi_choice(
            "major_criteria",
            "Criteri maggiori (cardite, artrite, corea, eritema marginato, noduli sottocutanei, cardite subclinica, poliartralgia)",
            &[
                "carditis",
                "arthritis",
                "chorea",
                "erythema_marginatum",
                "subcutaneous_nodules",
                "subclinical_carditis",
                "polyarthralgia",
            ],
        ),
        ParamSpec::multi_choice(
            "minor_criteria",
            "Criteri minori (febbre, VES/PCR elevata, PR prolungato, poliartralgia, monoartralgia)",
            &[
                "fever",
                "elevated_esr_crp",
                "prolonged_pr_interval",
                "polyarthralgia",
                "monoarthralgia",
            ],
        ),
    ];

    pub fn execute(params: &JonesParams) -> Result<CalculationResult, ToolError> {
        let high_risk = params.high_risk_population;
        let major = counted(
            &params.major_criteria,
            (!high_risk).then_some(MajorCriterion::Polyarthralgia),
        );
        let minor = counted(
            &params.minor_criteria,
            (!high_risk).then_some(MinorCriterion::Monoarthralgia),
        );
        let (major_count, minor_count) = (major.len(), minor.len());

        let recurrence = params.prior_rheumatic_heart_disease;
        let (mut diagnosis, reason) = match (recurrence, major_count, minor_count) {
            (false, 2.., _) => (
                "FEBBRE REUMATICA ACUTA CONFERMATA",
                "Primo episodio con ≥2 criteri maggiori",
            ),
            (false, 1, 2..) => (
                "FEBBRE REUMATICA ACUTA CONFERMATA",
                "Primo episodio con 1 criterio maggiore + ≥2 criteri minori",
            ),
            (false, _, _) => (
                "CRITERI NON SODDISFATTI",
                "Insufficienti criteri per febbre reumatica acuta",
            ),
            (true, 2.., _) => (
                "RECIDIVA DI FEBBRE REUMATICA CONFERMATA",
                "Recidiva con ≥2 criteri maggiori",
            ),
            (true, 1, 2..) => (
                "RECIDIVA DI FEBBRE REUMATICA CONFERMATA",
                "Recidiva con 1 criterio maggiore + ≥2 criteri minori",
            ),
            (true, 0, 3..) => (
                "RECIDIVA DI FEBBRE REUMATICA CONFERMATA",
                "Recidiva con ≥3 criteri minori",
            ),
            (true, _, _) => (
                "CRITERI NON SODDISFATTI PER RECIDIVA",
                "Insufficienti criteri per recidiva di febbre reumatica",
            ),
        };
        let confirmed = diagnosis.ends_with("CONFERMATA");

        let recommendation = if !params.confirmed_strep_infection {
            diagnosis = "DIAGNOSI INCERTA";
            "ATTENZIONE: Evidenza di infezione streptococcica precedente è essenziale per la diagnosi."
        } else if confirmed {
            "Iniziare trattamento appropriato e profilassi secondaria."
        } else {
            "Considerare diagnosi alternative."
        };

        let major_labels: Vec<&str> = major.iter().map(|c| c.label()).collect();
        let minor_labels: Vec<&str> = minor.iter().map(|c| c.label()).collect();

        Ok(CalculationResult::new(
            "Criteri di Jones (2015) per Febbre Reumatica Acuta",
            Measure::score("Criteri maggiori presenti", major_count as u32),
            Classification::new("Diagnosi", diagnosis).recommending(recommendation),
        )
        .detail("Dettagli", reason)
        .detail("Criteri minori presenti", minor_count)
        .detail("Popolazione ad alto rischio", si_no(high_risk))
        .detail("Precedente cardiopatia reumatica", si_no(recurrence))
        .detail(
            "Infezione streptococcica confermata",
            si_no(params.confirmed_strep_infection),
        )
        .detail("Criteri maggiori", list_or(&major_labels, "Nessuno"))
        .detail("Criteri minori", list_or(&minor_labels, "Nessuno"))
        .note("La poliartralgia è criterio maggiore SOLO in popolazioni ad alto rischio")
        .note("La profilassi secondaria è essenziale per prevenire recidive"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MajorCriterion::*;
    use MinorCriterion::{ElevatedEsrCrp, Fever, Monoarthralgia, ProlongedPrInterval};

    fn params(major: Vec<MajorCriterion>, minor: Vec<MinorCriterion>) -> JonesParams {
        JonesParams {
            prior_rheumatic_heart_disease: false,
            high_risk_population: false,
            confirmed_strep_infection: true,
            major_criteria: major,
            minor_criteria: minor,
        }
    }

    #[test]
    fn test_two_major_confirm_first_episode() {
        let result = JonesCriteriaTool::execute(&params(vec![Carditis, Chorea], vec![])).unwrap();
        assert_eq!(result.classification.label, "FEBBRE REUMATICA ACUTA CONFERMATA");
    }

    #[test]
    fn test_polyarthralgia_needs_high_risk_population() {
        let low = params(vec![Arthritis, Polyarthralgia], vec![]);
        assert_eq!(
            JonesCriteriaTool::execute(&low).unwrap().classification.label,
            "CRITERI NON SODDISFATTI"
        );

        let high = JonesParams {
            high_risk_population: true,
            ..low
        };
        assert_eq!(
            JonesCriteriaTool::execute(&high).unwrap().primary.value,
            2.0
        );
    }

    #[test]
    fn test_monoarthralgia_ignored_outside_high_risk() {
        let p = params(vec![Carditis], vec![Fever, Monoarthralgia]);
        let result = JonesCriteriaTool::execute(&p).unwrap();
        assert_eq!(result.classification.label, "CRITERI NON SODDISFATTI");
    }

    #[test]
    fn test_recurrence_on_minor_criteria_only() {
        let p = JonesParams {
            prior_rheumatic_heart_disease: true,
            ..params(vec![], vec![Fever, ElevatedEsrCrp, ProlongedPrInterval])
        };
        let result = JonesCriteriaTool::execute(&p).unwrap();
        assert_eq!(result.classification.label, "RECIDIVA DI FEBBRE REUMATICA CONFERMATA");
    }

    #[test]
    fn test_missing_strep_evidence_is_uncertain() {
        let p = JonesParams {
            confirmed_strep_infection: false,
            ..params(vec![Carditis, Arthritis], vec![])
        };
        let result = JonesCriteriaTool::execute(&p).unwrap();
        assert_eq!(result.classification.label, "DIAGNOSI INCERTA");
    }

    #[test]
    fn test_repeated_criteria_count_once() {
        let result =
            JonesCriteriaTool::execute(&params(vec![Carditis, Carditis], vec![])).unwrap();
        assert_eq!(result.primary.value, 1.0);
    }
}
