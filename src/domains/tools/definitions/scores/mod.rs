//! Scoring instruments: weighted-sum scores and diagnostic checklists.

pub mod apgar;
pub mod bops;
pub mod catch;
pub mod centor;
pub mod croup;
pub mod gcs;
pub mod hsp;
pub mod jones;
pub mod kawasaki;
pub mod kocher;
pub mod lansky;
pub mod mchat;
pub mod meningitis;
pub mod pas;
pub mod pas_asthma;
pub mod pass_asthma;
pub mod pews;
pub mod pnhs;
pub mod sickle_cell;
pub mod trauma;
pub mod wells;

pub use apgar::ApgarTool;
pub use bops::BopsTool;
pub use catch::CatchScoreTool;
pub use centor::CentorPediatricTool;
pub use croup::WestleyCroupTool;
pub use gcs::GcsPediatricTool;
pub use hsp::HspCriteriaTool;
pub use jones::JonesCriteriaTool;
pub use kawasaki::KawasakiCriteriaTool;
pub use kocher::KocherCriteriaTool;
pub use lansky::LanskyScoreTool;
pub use mchat::MchatTool;
pub use meningitis::BacterialMeningitisScoreTool;
pub use pas::PasTool;
pub use pas_asthma::PasAsthmaTool;
pub use pass_asthma::PassAsthmaTool;
pub use pews::PewsTool;
pub use pnhs::PnhsTool;
pub use sickle_cell::SickleCellRiskTool;
pub use trauma::PediatricTraumaScoreTool;
pub use wells::WellsPediatricTool;

use crate::domains::tools::descriptor::ToolDescriptor;

/// The scores family, in catalog order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        PewsTool::descriptor(),
        PasTool::descriptor(),
        ApgarTool::descriptor(),
        GcsPediatricTool::descriptor(),
        MchatTool::descriptor(),
        PediatricTraumaScoreTool::descriptor(),
        CatchScoreTool::descriptor(),
        WestleyCroupTool::descriptor(),
        CentorPediatricTool::descriptor(),
        WellsPediatricTool::descriptor(),
        PasAsthmaTool::descriptor(),
        PassAsthmaTool::descriptor(),
        BacterialMeningitisScoreTool::descriptor(),
        KocherCriteriaTool::descriptor(),
        KawasakiCriteriaTool::descriptor(),
        HspCriteriaTool::descriptor(),
        JonesCriteriaTool::descriptor(),
        BopsTool::descriptor(),
        LanskyScoreTool::descriptor(),
        SickleCellRiskTool::descriptor(),
        PnhsTool::descriptor(),
    ]
}
