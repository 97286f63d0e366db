//! Clinical assessments: structured questionnaires, age-dependent norms and
//! the Rome IV criteria for functional gastrointestinal disorders.

pub mod asthma_control;
pub mod brue;
pub mod dehydration;
pub mod developmental_milestones;
pub mod heads_ed;
pub mod nutritional_status;
pub mod pain_scale;
pub mod pediatric_sleep;
pub mod rome4;

pub use asthma_control::AsthmaControlTool;
pub use brue::BrueCriteriaTool;
pub use dehydration::DehydrationTool;
pub use developmental_milestones::DevelopmentalMilestonesTool;
pub use heads_ed::HeadsEdTool;
pub use nutritional_status::NutritionalStatusTool;
pub use pain_scale::PainScaleTool;
pub use pediatric_sleep::PediatricSleepTool;

use crate::domains::tools::descriptor::ToolDescriptor;

/// Assessment tools in catalog order.
pub fn tools() -> Vec<ToolDescriptor> {
    let mut tools = vec![
        DehydrationTool::descriptor(),
        PainScaleTool::descriptor(),
        NutritionalStatusTool::descriptor(),
        DevelopmentalMilestonesTool::descriptor(),
        AsthmaControlTool::descriptor(),
        HeadsEdTool::descriptor(),
        PediatricSleepTool::descriptor(),
    ];
    tools.extend(rome4::tools());
    tools.push(BrueCriteriaTool::descriptor());
    tools
}
