//! Petrol car

use std::io::Write;

use fleetwise_types::{Result, VehicleKind};
use serde::{Deserialize, Serialize};

use super::capability::Fuelable;
use super::vehicle::{Vehicle, VehicleInfo};

pub const CAR_REFUEL_MESSAGE: &str = "Refueling car with petrol";

/// Cars older than this many years move to the high tier
const AGE_THRESHOLD: i64 = 5;
const HIGH_TIER_COST: u32 = 1000;
const LOW_TIER_COST: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    info: VehicleInfo,
}

impl Car {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            info: VehicleInfo::new(make, model, year),
        }
    }
}

impl Vehicle for Car {
    fn info(&self) -> &VehicleInfo {
        &self.info
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn insurance_cost_at(&self, reference_year: i32) -> u32 {
        if self.info.age_at(reference_year) > AGE_THRESHOLD {
            HIGH_TIER_COST
        } else {
            LOW_TIER_COST
        }
    }
}

impl Fuelable for Car {
    fn refuel(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", CAR_REFUEL_MESSAGE)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::REFERENCE_YEAR;

    #[test]
    fn test_insurance_by_age() {
        for age in -3..=40 {
            let car = Car::new("Toyota", "Camry", REFERENCE_YEAR - age);
            let expected = if age > 5 { 1000 } else { 500 };
            assert_eq!(car.calculate_insurance_cost(), expected, "age {}", age);
        }
    }

    #[test]
    fn test_insurance_at_threshold() {
        assert_eq!(Car::new("A", "B", 2019).calculate_insurance_cost(), 500);
        assert_eq!(Car::new("A", "B", 2018).calculate_insurance_cost(), 1000);
    }

    #[test]
    fn test_insurance_at_other_reference_year() {
        let car = Car::new("Toyota", "Camry", 2018);
        assert_eq!(car.insurance_cost_at(2020), 500);
        assert_eq!(car.insurance_cost_at(2030), 1000);
    }

    #[test]
    fn test_refuel_message() {
        let mut out = Vec::new();
        Car::new("Toyota", "Camry", 2018).refuel(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Refueling car with petrol\n");
    }

    #[test]
    fn test_accessors() {
        let car = Car::new("Toyota", "Camry", 2018);
        assert_eq!(car.make(), "Toyota");
        assert_eq!(car.model(), "Camry");
        assert_eq!(car.year(), 2018);
        assert_eq!(car.kind(), VehicleKind::Car);
    }
}
