//! Everyday primary-care checks: fever fluid correction and growth follow-up.

pub mod fever_fluids;
pub mod growth_velocity;
pub mod head_circumference;

pub use fever_fluids::FeverFluidsTool;
pub use growth_velocity::GrowthVelocityTool;
pub use head_circumference::HeadCircumferenceTool;

use crate::domains::tools::descriptor::ToolDescriptor;

/// Clinical tools in catalog order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        FeverFluidsTool::descriptor(),
        GrowthVelocityTool::descriptor(),
        HeadCircumferenceTool::descriptor(),
    ]
}
