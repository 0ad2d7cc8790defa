//! Diesel truck

use std::io::Write;

use fleetwise_types::{Result, VehicleKind};
use serde::{Deserialize, Serialize};

use super::capability::Fuelable;
use super::vehicle::{Vehicle, VehicleInfo};

pub const TRUCK_REFUEL_MESSAGE: &str = "Refueling truck with diesel";

const AGE_THRESHOLD: i64 = 8;
const HIGH_TIER_COST: u32 = 1500;
const LOW_TIER_COST: u32 = 700;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truck {
    info: VehicleInfo,
}

impl Truck {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            info: VehicleInfo::new(make, model, year),
        }
    }
}

impl Vehicle for Truck {
    fn info(&self) -> &VehicleInfo {
        &self.info
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Truck
    }

    fn insurance_cost_at(&self, reference_year: i32) -> u32 {
        if self.info.age_at(reference_year) > AGE_THRESHOLD {
            HIGH_TIER_COST
        } else {
            LOW_TIER_COST
        }
    }
}

impl Fuelable for Truck {
    fn refuel(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", TRUCK_REFUEL_MESSAGE)?;
        Ok(())
    }
}
