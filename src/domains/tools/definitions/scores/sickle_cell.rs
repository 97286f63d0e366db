//! Risk of severe complications in pediatric sickle cell disease.

use serde::Deserialize;

use super::super::common::list_or;
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{Band, CalculationResult, Classification, Measure, classify, si_no};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Genotype {
    #[serde(rename = "ss")]
    Ss,
    #[serde(rename = "sbeta0")]
    SBeta0,
    #[serde(rename = "sc")]
    Sc,
    #[serde(rename = "sbeta+")]
    SBetaPlus,
}

impl Genotype {
    fn label(self) -> &'static str {
        match self {
            Self::Ss => "SS",
            Self::SBeta0 => "Sβ0",
            Self::Sc => "SC",
            Self::SBetaPlus => "Sβ+",
        }
    }

    fn is_severe(self) -> bool {
        matches!(self, Self::Ss | Self::SBeta0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SickleCellParams {
    pub hemoglobin_level: f64,
    pub wbc_count: f64,
    pub history_of_acs: bool,
    pub pain_events_per_year: u32,
    pub genotype: Genotype,
    #[serde(default)]
    pub dactylitis_under_1_year: bool,
    /// Not a risk factor when unreported.
    pub hemoglobin_f_level: Option<f64>,
}

pub static SICKLE_CELL_BANDS: &[Band] = &[
    Band::at_most(
        0.0,
        "BASSO",
        "Monitoraggio standard, profilassi infezioni, screening complicanze",
    ),
    Band::at_most(
        2.0,
        "INTERMEDIO",
        "Monitoraggio più frequente, considerare idrossiurea",
    ),
    Band::otherwise(
        "ALTO",
        "Idrossiurea fortemente raccomandata, monitoraggio intensivo",
    ),
];

pub struct SickleCellRiskTool;

impl SickleCellRiskTool {
    pub const NAME: &'static str = "calculate_sickle_cell_complication_risk";

    pub const DESCRIPTION: &'static str = "Calcola il rischio di complicanze severe in bambini con anemia falciforme (Miller et al.)";

    pub const PARAMS: &'static [ParamSpec] = &[
        ParamSpec::number("hemoglobin_level", "Livello di emoglobina basale in g/dL").range(3.0, 15.0),
        ParamSpec::number("wbc_count", "Conta leucocitaria basale in x10^3/μL").range(1.0, 50.0),
        ParamSpec::boolean("history_of_acs", "Storia di sindrome toracica acuta"),
        ParamSpec::integer(
            "pain_events_per_year",
            "Numero di eventi dolorosi che richiedono assistenza medica all'anno",
        )
        .range(0.0, 20.0),
        ParamSpec::boolean(
            "dactylitis_under_1_year",
            "Storia di dattilite prima dell'anno di età",
        )
        .default_bool(false),
        ParamSpec::number("hemoglobin_f_level", "Livello di emoglobina fetale (%)")
            .range(0.0, 100.0)
            .optional(),
        ParamSpec::choice(
            "genotype",
            "Genotipo: SS, Sβ0, SC o Sβ+",
            &["ss", "sbeta0", "sc", "sbeta+"],
        ),
    ];

    pub fn execute(params: &SickleCellParams) -> Result<CalculationResult, ToolError> {
        let mut factors = Vec::new();
        if params.hemoglobin_level < 7.0 {
            factors.push(format!(
                "Emoglobina basale bassa: {} g/dL (<7 g/dL)",
                params.hemoglobin_level
            ));
        }
        if params.wbc_count > 15.0 {
            factors.push(format!(
                "Leucocitosi: {} x10^3/μL (>15 x10^3/μL)",
                params.wbc_count
            ));
        }
        if params.history_of_acs {
            factors.push("Storia di sindrome toracica acuta".to_string());
        }
        if params.pain_events_per_year >= 3 {
            factors.push(format!(
                "Eventi dolorosi frequenti: {}/anno (≥3/anno)",
                params.pain_events_per_year
            ));
        }
        if params.dactylitis_under_1_year {
            factors.push("Dattilite prima dell'anno di età".to_string());
        }
        if let Some(hbf) = params.hemoglobin_f_level.filter(|&hbf| hbf < 10.0) {
            factors.push(format!("Emoglobina fetale bassa: {hbf}% (<10%)"));
        }
        if params.genotype.is_severe() {
            factors.push(format!(
                "Genotipo a rischio elevato: {}",
                params.genotype.label()
            ));
        }

        let count = factors.len() as u32;
        let band = classify(f64::from(count), SICKLE_CELL_BANDS)?;
        let hydroxyurea = (params.history_of_acs || params.pain_events_per_year >= 3)
            && params.genotype.is_severe();

        let factor_refs: Vec<&str> = factors.iter().map(String::as_str).collect();
        let hbf = params
            .hemoglobin_f_level
            .map_or_else(|| "Non specificata".to_string(), |v| format!("{v}%"));

        Ok(CalculationResult::new(
            "Valutazione Rischio Complicanze in Anemia Falciforme",
            Measure::score("Fattori di rischio", count).out_of(7),
            Classification::from_band("Livello di rischio", band),
        )
        .secondary(Classification::new(
            "Indicazione a idrossiurea",
            if hydroxyurea { "SÌ" } else { "NO" },
        ))
        .detail(
            "Fattori di rischio identificati",
            list_or(&factor_refs, "Nessun fattore di rischio significativo identificato"),
        )
        .detail("Genotipo", params.genotype.label())
        .detail("Storia di sindrome toracica acuta", si_no(params.history_of_acs))
        .detail("Dattilite <1 anno", si_no(params.dactylitis_under_1_year))
        .detail("Emoglobina fetale", hbf)
        .note("Idrossiurea (NHLBI): bambini ≥9 mesi con genotipo SS o Sβ0 e crisi dolorose ricorrenti o sindrome toracica acuta"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
            .with_bands([SICKLE_CELL_BANDS])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline(genotype: Genotype) -> SickleCellParams {
        SickleCellParams {
            hemoglobin_level: 9.0,
            wbc_count: 10.0,
            history_of_acs: false,
            pain_events_per_year: 0,
            genotype,
            dactylitis_under_1_year: false,
            hemoglobin_f_level: None,
        }
    }

    #[test]
    fn test_unreported_hbf_is_not_a_risk_factor() {
        let result = SickleCellRiskTool::execute(&baseline(Genotype::Sc)).unwrap();
        assert_eq!(result.primary.value, 0.0);
        assert_eq!(result.classification.label, "BASSO");

        let low_hbf = SickleCellParams {
            hemoglobin_f_level: Some(5.0),
            ..baseline(Genotype::Sc)
        };
        assert_eq!(SickleCellRiskTool::execute(&low_hbf).unwrap().primary.value, 1.0);
    }

    #[test]
    fn test_hydroxyurea_needs_severe_genotype() {
        let ss = SickleCellParams {
            history_of_acs: true,
            ..baseline(Genotype::Ss)
        };
        let result = SickleCellRiskTool::execute(&ss).unwrap();
        assert_eq!(result.secondary[0].label, "SÌ");
        assert_eq!(result.classification.label, "INTERMEDIO");

        let sc = SickleCellParams {
            history_of_acs: true,
            ..baseline(Genotype::Sc)
        };
        assert_eq!(SickleCellRiskTool::execute(&sc).unwrap().secondary[0].label, "NO");
    }

    #[test]
    fn test_genotype_wire_names() {
        let g: Genotype = serde_json::from_value(serde_json::json!("sbeta+")).unwrap();
        assert_eq!(g, Genotype::SBetaPlus);
    }
}
