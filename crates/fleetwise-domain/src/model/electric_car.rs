//! Battery electric car

use std::io::Write;

use fleetwise_types::{Result, VehicleKind};
use serde::{Deserialize, Serialize};

use super::capability::Rechargeable;
use super::vehicle::{Vehicle, VehicleInfo};

pub const RECHARGE_MESSAGE: &str = "Recharging electric car";

const AGE_THRESHOLD: i64 = 5;
const HIGH_TIER_COST: u32 = 2000;
const LOW_TIER_COST: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectricCar {
    info: VehicleInfo,
}

impl ElectricCar {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            info: VehicleInfo::new(make, model, year),
        }
    }
}

impl Vehicle for ElectricCar {
    fn info(&self) -> &VehicleInfo {
        &self.info
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::ElectricCar
    }

    fn insurance_cost_at(&self, reference_year: i32) -> u32 {
        if self.info.age_at(reference_year) > AGE_THRESHOLD {
            HIGH_TIER_COST
        } else {
            LOW_TIER_COST
        }
    }
}

impl Rechargeable for ElectricCar {
    fn recharge(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", RECHARGE_MESSAGE)?;
        Ok(())
    }
}
