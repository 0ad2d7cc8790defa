//! Maintenance tools and the service that runs them
//!
//! `MaintenanceService` only knows the `MaintenanceTool` trait. Swapping
//! in a different tool needs no change to the service.

use std::io::Write;

use fleetwise_types::Result;
use tracing::debug;

use crate::model::Vehicle;

/// Something that can service a vehicle
pub trait MaintenanceTool {
    /// Short identifier used in logs and CLI selection
    fn name(&self) -> &str;

    /// Perform the work and write a report line to `out`
    fn perform_maintenance(&self, vehicle: &dyn Vehicle, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrakeInspectionTool;

impl MaintenanceTool for BrakeInspectionTool {
    fn name(&self) -> &str {
        "brake"
    }

    fn perform_maintenance(&self, vehicle: &dyn Vehicle, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Performing brake inspection on {} {}",
            vehicle.make(),
            vehicle.model()
        )?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OilChangeTool;

impl MaintenanceTool for OilChangeTool {
    fn name(&self) -> &str {
        "oil"
    }

    fn perform_maintenance(&self, vehicle: &dyn Vehicle, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Changing oil on {} {}", vehicle.make(), vehicle.model())?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BatteryDiagnosticTool;

impl MaintenanceTool for BatteryDiagnosticTool {
    fn name(&self) -> &str {
        "battery"
    }

    fn perform_maintenance(&self, vehicle: &dyn Vehicle, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Running battery diagnostics on {} {}",
            vehicle.make(),
            vehicle.model()
        )?;
        Ok(())
    }
}

/// Services vehicles with the tool injected at construction
pub struct MaintenanceService {
    tool: Box<dyn MaintenanceTool>,
}

impl MaintenanceService {
    pub fn new(tool: Box<dyn MaintenanceTool>) -> Self {
        Self { tool }
    }

    pub fn tool_name(&self) -> &str {
        self.tool.name()
    }

    pub fn service_vehicle(&self, vehicle: &dyn Vehicle, out: &mut dyn Write) -> Result<()> {
        debug!(
            tool = self.tool.name(),
            make = vehicle.make(),
            model = vehicle.model(),
            "servicing vehicle"
        );
        self.tool.perform_maintenance(vehicle, out)
    }
}

impl std::fmt::Debug for MaintenanceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaintenanceService")
            .field("tool", &self.tool.name())
            .finish()
    }
}
