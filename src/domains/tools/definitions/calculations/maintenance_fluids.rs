//! Holliday-Segar maintenance fluids.

use serde::Deserialize;

use crate::domains::formulas::fluids::{holliday_segar, maintenance_electrolytes_meq};
use crate::domains::tools::descriptor::ToolDescriptor;
use crate::domains::tools::error::ToolError;
use crate::domains::tools::result::{CalculationResult, Classification, Measure};
use crate::domains::tools::schema::ParamSpec;

#[derive(Debug, Clone, Deserialize)]
pub struct MaintenanceFluidsParams {
    pub weight_kg: f64,
}

pub struct MaintenanceFluidsTool;

impl MaintenanceFluidsTool {
    pub const NAME: &'static str = "calculate_maintenance_fluids";

    pub const DESCRIPTION: &'static str =
        "Calcola i fluidi di mantenimento secondo il metodo Holiday-Segar";

    pub const PARAMS: &'static [ParamSpec] =
        &[ParamSpec::number("weight_kg", "Peso del paziente in kg").range(0.5, 150.0)];

    pub fn execute(params: &MaintenanceFluidsParams) -> Result<CalculationResult, ToolError> {
        let fluids = holliday_segar(params.weight_kg)?;
        let electrolytes = maintenance_electrolytes_meq(fluids.daily_ml);

        Ok(CalculationResult::new(
            "Fluidi di Mantenimento (Holliday-Segar)",
            Measure::quantity("Volume giornaliero", fluids.daily_ml, 0, "ml/24h"),
            Classification::new("Rate infusionale", format!("{:.1} ml/h", fluids.hourly_ml)),
        )
        .detail("Peso paziente", format!("{} kg", params.weight_kg))
        .detail("Rate orario", format!("{:.1} ml/h", fluids.hourly_ml))
        .detail("Sodio", format!("{electrolytes} mEq/die"))
        .detail("Potassio", format!("{electrolytes} mEq/die"))
        .note("Primi 10 kg: 100 ml/kg/die; kg 11-20: 50 ml/kg/die; oltre 20 kg: 20 ml/kg/die")
        .note("Valido per bambini sani senza perdite patologiche")
        .note("Aumentare del 10-15% per ogni grado di febbre >38°C")
        .note("Soluzione standard: glucosata 5% + NaCl 0.45% + KCl 20 mEq/L"))
    }

    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::typed(Self::NAME, Self::DESCRIPTION, Self::PARAMS, Self::execute)
    }
}
