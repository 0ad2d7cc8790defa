//! Closed enumeration over every vehicle variant
//!
//! Used where the variant is only known at runtime (CLI arguments,
//! roster files). Capability lookups return `None` when the variant does
//! not offer that capability.

use fleetwise_types::VehicleKind;
use serde::{Deserialize, Serialize};

use super::capability::{Fuelable, Rechargeable};
use super::{Car, ElectricCar, Truck, Vehicle, VehicleInfo};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AnyVehicle {
    Car(Car),
    Truck(Truck),
    ElectricCar(ElectricCar),
}

impl AnyVehicle {
    pub fn new(kind: VehicleKind, make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        match kind {
            VehicleKind::Car => AnyVehicle::Car(Car::new(make, model, year)),
            VehicleKind::Truck => AnyVehicle::Truck(Truck::new(make, model, year)),
            VehicleKind::ElectricCar => AnyVehicle::ElectricCar(ElectricCar::new(make, model, year)),
        }
    }

    pub fn as_vehicle(&self) -> &dyn Vehicle {
        match self {
            AnyVehicle::Car(v) => v,
            AnyVehicle::Truck(v) => v,
            AnyVehicle::ElectricCar(v) => v,
        }
    }

    pub fn as_fuelable(&self) -> Option<&dyn Fuelable> {
        match self {
            AnyVehicle::Car(v) => Some(v),
            AnyVehicle::Truck(v) => Some(v),
            AnyVehicle::ElectricCar(_) => None,
        }
    }

    pub fn as_rechargeable(&self) -> Option<&dyn Rechargeable> {
        match self {
            AnyVehicle::ElectricCar(v) => Some(v),
            AnyVehicle::Car(_) | AnyVehicle::Truck(_) => None,
        }
    }
}

impl Vehicle for AnyVehicle {
    fn info(&self) -> &VehicleInfo {
        self.as_vehicle().info()
    }

    fn kind(&self) -> VehicleKind {
        self.as_vehicle().kind()
    }

    fn insurance_cost_at(&self, reference_year: i32) -> u32 {
        self.as_vehicle().insurance_cost_at(reference_year)
    }
}

impl From<Car> for AnyVehicle {
    fn from(car: Car) -> Self {
        AnyVehicle::Car(car)
    }
}

impl From<Truck> for AnyVehicle {
    fn from(truck: Truck) -> Self {
        AnyVehicle::Truck(truck)
    }
}

impl From<ElectricCar> for AnyVehicle {
    fn from(car: ElectricCar) -> Self {
        AnyVehicle::ElectricCar(car)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matches_kind() {
        for kind in [VehicleKind::Car, VehicleKind::Truck, VehicleKind::ElectricCar] {
            let v = AnyVehicle::new(kind, "Make", "Model", 2020);
            assert_eq!(v.kind(), kind);
            assert_eq!(v.make(), "Make");
            assert_eq!(v.model(), "Model");
            assert_eq!(v.year(), 2020);
        }
    }

    #[test]
    fn test_capabilities() {
        let car = AnyVehicle::new(VehicleKind::Car, "Toyota", "Camry", 2018);
        let truck = AnyVehicle::new(VehicleKind::Truck, "Ford", "F-150", 1980);
        let ev = AnyVehicle::new(VehicleKind::ElectricCar, "Tesla", "Model 3", 2021);

        assert!(car.as_fuelable().is_some());
        assert!(car.as_rechargeable().is_none());
        assert!(truck.as_fuelable().is_some());
        assert!(truck.as_rechargeable().is_none());
        assert!(ev.as_fuelable().is_none());
        assert!(ev.as_rechargeable().is_some());
    }

    #[test]
    fn test_dispatches_variant_formula() {
        let car: AnyVehicle = Car::new("Toyota", "Camry", 2018).into();
        let truck: AnyVehicle = Truck::new("Ford", "F-150", 1980).into();
        let ev: AnyVehicle = ElectricCar::new("Tesla", "Model 3", 2021).into();
        assert_eq!(car.calculate_insurance_cost(), 1000);
        assert_eq!(truck.calculate_insurance_cost(), 1500);
        assert_eq!(ev.calculate_insurance_cost(), 1000);
    }

    #[test]
    fn test_refuel_through_capability() {
        let truck = AnyVehicle::new(VehicleKind::Truck, "Ford", "F-150", 1980);
        let mut out = Vec::new();
        truck.as_fuelable().unwrap().refuel(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Refueling truck with diesel\n");
    }
}
