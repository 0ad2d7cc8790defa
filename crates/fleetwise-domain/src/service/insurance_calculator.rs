//! Insurance cost lookup through the vehicle's own formula

use fleetwise_types::VehicleKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Vehicle;

/// Stateless calculator; the variant owns its formula
#[derive(Debug, Default, Clone, Copy)]
pub struct InsuranceCalculator;

/// Insurance figures for one vehicle, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceQuote {
    pub kind: VehicleKind,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub base_cost: u32,
    pub surcharge: u32,
    pub displayed_cost: u32,
}

impl InsuranceCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_vehicle_insurance(&self, vehicle: &dyn Vehicle) -> u32 {
        let cost = vehicle.calculate_insurance_cost();
        debug!(
            kind = %vehicle.kind(),
            make = vehicle.make(),
            model = vehicle.model(),
            cost,
            "calculated insurance"
        );
        cost
    }

    /// Base cost plus a flat display surcharge
    pub fn quote(&self, vehicle: &dyn Vehicle, surcharge: u32) -> InsuranceQuote {
        let base_cost = self.calculate_vehicle_insurance(vehicle);
        InsuranceQuote {
            kind: vehicle.kind(),
            make: vehicle.make().to_string(),
            model: vehicle.model().to_string(),
            year: vehicle.year(),
            base_cost,
            surcharge,
            displayed_cost: base_cost.saturating_add(surcharge),
        }
    }
}
