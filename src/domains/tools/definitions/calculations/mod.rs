//! Formula-based calculators: body size, fluids, renal function and labs.

pub mod anc;
pub mod blood_pressure;
pub mod bmi;
pub mod bone_health;
pub mod bsa;
pub mod burned_surface_area;
pub mod creatinine_clearance;
pub mod daily_calories;
pub mod maintenance_fluids;
pub mod pnfs;
pub mod predicted_height;

pub use anc::AncTool;
pub use blood_pressure::NormalBloodPressureTool;
pub use bmi::BmiPediatricTool;
pub use bone_health::BoneHealthTool;
pub use bsa::BsaTool;
pub use burned_surface_area::BurnedSurfaceAreaTool;
pub use creatinine_clearance::CreatinineClearanceTool;
pub use daily_calories::DailyCaloriesTool;
pub use maintenance_fluids::MaintenanceFluidsTool;
pub use pnfs::PnfsTool;
pub use predicted_height::PredictedHeightTool;

use crate::domains::tools::descriptor::ToolDescriptor;

/// Calculation tools in catalog order.
pub fn tools() -> Vec<ToolDescriptor> {
    vec![
        BsaTool::descriptor(),
        MaintenanceFluidsTool::descriptor(),
        CreatinineClearanceTool::descriptor(),
        BmiPediatricTool::descriptor(),
        DailyCaloriesTool::descriptor(),
        NormalBloodPressureTool::descriptor(),
        PredictedHeightTool::descriptor(),
        BurnedSurfaceAreaTool::descriptor(),
        AncTool::descriptor(),
        PnfsTool::descriptor(),
        BoneHealthTool::descriptor(),
    ]
}
