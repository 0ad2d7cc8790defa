//! Maintenance tool selection by name

use fleetwise_domain::service::{
    BatteryDiagnosticTool, BrakeInspectionTool, MaintenanceTool, OilChangeTool,
};
use fleetwise_types::{Error, Result};

/// Names accepted by [`tool_from_name`]
pub const TOOL_NAMES: &[&str] = &["brake", "oil", "battery"];

/// Build the maintenance tool registered under `name`
pub fn tool_from_name(name: &str) -> Result<Box<dyn MaintenanceTool>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "brake" | "brakes" => Ok(Box::new(BrakeInspectionTool)),
        "oil" => Ok(Box::new(OilChangeTool)),
        "battery" => Ok(Box::new(BatteryDiagnosticTool)),
        other => Err(Error::UnknownTool(other.to_string())),
    }
}
