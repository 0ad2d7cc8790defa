//! Fixed demonstration scenario run by a bare `fleetwise` invocation

use std::io::Write;

use fleetwise_domain::model::{Car, ElectricCar, Fuelable, Rechargeable, Truck};
use fleetwise_domain::service::{
    BrakeInspectionTool, InsuranceCalculator, MaintenanceService, ObjectFormatter,
};
use fleetwise_types::Result;
use tracing::info;

/// Added to the base insurance cost in the demo report
pub const DEMO_SURCHARGE: u32 = 100;

/// Run the demo, writing every report line to `out`
pub fn run_demo(out: &mut dyn Write) -> Result<()> {
    info!("running demonstration scenario");

    let car = Car::new("Toyota", "Camry", 2018);
    let truck = Truck::new("Ford", "F-150", 1980);
    let electric_car = ElectricCar::new("Tesla", "Model 3", 2021);

    car.refuel(out)?;
    truck.refuel(out)?;
    electric_car.recharge(out)?;
    car.refuel(out)?;

    let insurance_calculator = InsuranceCalculator::new();
    let formatter = ObjectFormatter::new();

    writeln!(
        out,
        "Car Insurance Cost: ${}",
        insurance_calculator.calculate_vehicle_insurance(&car) + DEMO_SURCHARGE
    )?;
    writeln!(
        out,
        "Truck Insurance Cost: ${}",
        insurance_calculator.calculate_vehicle_insurance(&truck) + DEMO_SURCHARGE
    )?;
    writeln!(out, "Vehicle Details in JSON: {}", formatter.vehicle_to_json(&car)?)?;
    writeln!(out, "Vehicle Details in JSON: {}", formatter.vehicle_to_json(&truck)?)?;

    let service = MaintenanceService::new(Box::new(BrakeInspectionTool));
    service.service_vehicle(&car, out)?;

    Ok(())
}
