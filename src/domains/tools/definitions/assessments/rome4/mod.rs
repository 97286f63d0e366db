//! Rome IV criteria for pediatric functional gastrointestinal disorders.
//!
//! Every tool in this family evaluates a fixed checklist: the diagnosis is
//! made only when every criterion holds. When it is not, the recommendation
//! either flags a picture "in evoluzione" worth re-evaluating or points to
//! alternative diagnoses.

pub mod abdominal_migraine;
pub mod aerophagia;
pub mod constipation;
pub mod cyclic_vomiting;
pub mod functional_abdominal_pain;
pub mod functional_dyspepsia;
pub mod functional_nausea_vomiting;
pub mod ibs;
pub mod nonretentive_fecal_incontinence;
pub mod rumination;

pub use abdominal_migraine::AbdominalMigraineTool;
pub use aerophagia::AerophagiaTool;
pub use constipation::ConstipationTool;
pub use cyclic_vomiting::CyclicVomitingTool;
pub use functional_abdominal_pain::FunctionalAbdominalPainTool;
pub use functional_dyspepsia::FunctionalDyspepsiaTool;
pub use functional_nausea_vomiting::FunctionalNauseaVomitingTool;
pub use ibs::IbsTool;
pub use nonretentive_fecal_incontinence::NonretentiveFecalIncontinenceTool;
pub use rumination::RuminationSyndromeTool;

use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::result::{CalculationResult, Classification, Measure};

pub const CRITERIA_MET: &str = "CRITERI ROME IV SODDISFATTI";
pub const CRITERIA_NOT_MET: &str = "CRITERI ROME IV NON SODDISFATTI";

/// Rome IV tools in catalog order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        AbdominalMigraineTool::descriptor(),
        AerophagiaTool::descriptor(),
        ConstipationTool::descriptor(),
        CyclicVomitingTool::descriptor(),
        FunctionalAbdominalPainTool::descriptor(),
        FunctionalDyspepsiaTool::descriptor(),
        FunctionalNauseaVomitingTool::descriptor(),
        IbsTool::descriptor(),
        NonretentiveFecalIncontinenceTool::descriptor(),
        RuminationSyndromeTool::descriptor(),
    ]
}

/// Met and unmet criteria, one entry per criterion.
#[derive(Debug, Clone, Default)]
pub struct Checklist {
    met: Vec<String>,
    unmet: Vec<String>,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a criterion, worded differently depending on whether it holds.
    pub fn check(mut self, holds: bool, met: impl Into<String>, unmet: impl Into<String>) -> Self {
        if holds {
            self.met.push(met.into());
        } else {
            self.unmet.push(unmet.into());
        }
        self
    }

    /// Record a criterion worded the same either way.
    pub fn require(self, holds: bool, criterion: &str) -> Self {
        self.check(holds, criterion, criterion)
    }

    /// Symptoms present for at least `required` months.
    pub fn duration(self, months: u32, required: u32) -> Self {
        self.check(
            months >= required,
            format!("Durata dei sintomi: {months} mesi (≥{required} mesi richiesti)"),
            format!("Durata dei sintomi: {months} mesi (<{required}, richiesti ≥{required} mesi)"),
        )
    }

    /// A condition that must be absent, e.g. an organic disease explaining the symptoms.
    pub fn exclude(self, present: bool, condition: &str) -> Self {
        self.check(
            !present,
            format!("Assenza di {condition}"),
            format!("Presenza di {condition}"),
        )
    }

    pub fn all_met(&self) -> bool {
        self.unmet.is_empty()
    }

    pub fn unmet_count(&self) -> usize {
        self.unmet.len()
    }

    /// Build the result: diagnosis when every criterion holds, otherwise
    /// the `fallback` recommendation.
    pub fn conclude(self, title: &str, diagnosis: String, fallback: String) -> CalculationResult {
        let total = (self.met.len() + self.unmet.len()) as u32;
        let classification = if self.all_met() {
            Classification::new("Diagnosi", CRITERIA_MET).recommending(diagnosis)
        } else {
            Classification::new("Diagnosi", CRITERIA_NOT_MET).recommending(fallback)
        };

        let result = CalculationResult::new(
            title,
            Measure::score("Criteri soddisfatti", self.met.len() as u32).out_of(total),
            classification,
        );
        let result = self
            .met
            .into_iter()
            .fold(result, |acc, criterion| acc.detail("Soddisfatto", criterion));
        self.unmet
            .into_iter()
            .fold(result, |acc, criterion| acc.detail("Non soddisfatto", criterion))
    }
}

/// Recommendation when the criteria are not (yet) met.
pub fn evolving_or_alternatives(evolving: bool, condition: &str) -> String {
    if evolving {
        format!("Possibile {condition} in evoluzione, rivalutare")
    } else {
        "Considerare diagnosi alternative".to_string()
    }
}
