//! Domain model types

pub mod any_vehicle;
pub mod capability;
pub mod car;
pub mod electric_car;
pub mod truck;
pub mod vehicle;

pub use any_vehicle::AnyVehicle;
pub use capability::{Fuelable, Rechargeable};
pub use car::Car;
pub use electric_car::ElectricCar;
pub use truck::Truck;
pub use vehicle::{Vehicle, VehicleInfo, REFERENCE_YEAR};
