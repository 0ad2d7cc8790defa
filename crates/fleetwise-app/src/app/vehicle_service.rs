//! Per-vehicle use cases: quote, describe, service, refuel/recharge

use std::io::Write;

use fleetwise_domain::model::{AnyVehicle, Fuelable, Rechargeable, Vehicle};
use fleetwise_domain::service::{
    InsuranceCalculator, InsuranceQuote, MaintenanceService, ObjectFormatter,
};
use fleetwise_types::Result;
use tracing::info;

use crate::roster::Roster;
use crate::tools::tool_from_name;

pub fn quote_vehicle(vehicle: &dyn Vehicle, surcharge: u32) -> InsuranceQuote {
    InsuranceCalculator::new().quote(vehicle, surcharge)
}

/// Quote every roster vehicle in file order
pub fn quote_roster(roster: &Roster, surcharge: u32) -> Vec<InsuranceQuote> {
    let calculator = InsuranceCalculator::new();
    roster
        .vehicles()
        .iter()
        .map(|v| calculator.quote(v, surcharge))
        .collect()
}

pub fn describe_vehicle(vehicle: &dyn Vehicle) -> Result<String> {
    ObjectFormatter::new().vehicle_to_json(vehicle)
}

/// Service `vehicle` with the tool registered under `tool_name`
pub fn service_vehicle(vehicle: &dyn Vehicle, tool_name: &str, out: &mut dyn Write) -> Result<()> {
    let service = MaintenanceService::new(tool_from_name(tool_name)?);
    info!(tool = service.tool_name(), "starting maintenance");
    service.service_vehicle(vehicle, out)
}

/// Refuel or recharge, whichever the vehicle supports
pub fn energize_vehicle(vehicle: &AnyVehicle, out: &mut dyn Write) -> Result<()> {
    match vehicle {
        AnyVehicle::Car(car) => car.refuel(out),
        AnyVehicle::Truck(truck) => truck.refuel(out),
        AnyVehicle::ElectricCar(electric_car) => electric_car.recharge(out),
    }
}
