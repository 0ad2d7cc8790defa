//! Domain services

pub mod insurance_calculator;
pub mod maintenance;
pub mod object_formatter;

pub use insurance_calculator::{InsuranceCalculator, InsuranceQuote};
pub use maintenance::{
    BatteryDiagnosticTool, BrakeInspectionTool, MaintenanceService, MaintenanceTool,
    OilChangeTool,
};
pub use object_formatter::{ObjectFormatter, VehicleDetails};
