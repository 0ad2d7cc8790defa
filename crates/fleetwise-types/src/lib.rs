//! Core types for fleetwise

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Closed set of vehicle variants
///
/// Parsing from CLI arguments and roster files both go through [`FromStr`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum VehicleKind {
    Car,
    Truck,
    ElectricCar,
}

impl VehicleKind {
    /// Human-readable label used in report lines ("Car Insurance Cost: ...")
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Truck => "Truck",
            VehicleKind::ElectricCar => "Electric Car",
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleKind::Car => write!(f, "car"),
            VehicleKind::Truck => write!(f, "truck"),
            VehicleKind::ElectricCar => write!(f, "electric-car"),
        }
    }
}

impl FromStr for VehicleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(VehicleKind::Car),
            "truck" => Ok(VehicleKind::Truck),
            "electric-car" | "electric_car" | "electriccar" | "ev" => Ok(VehicleKind::ElectricCar),
            _ => Err(Error::UnknownVehicleKind(s.trim().to_string())),
        }
    }
}

impl TryFrom<String> for VehicleKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_kind_from_str() {
        assert_eq!("car".parse::<VehicleKind>().unwrap(), VehicleKind::Car);
        assert_eq!("Truck".parse::<VehicleKind>().unwrap(), VehicleKind::Truck);
        assert_eq!("EV".parse::<VehicleKind>().unwrap(), VehicleKind::ElectricCar);
        assert_eq!(
            "electric_car".parse::<VehicleKind>().unwrap(),
            VehicleKind::ElectricCar
        );
    }

    #[test]
    fn test_vehicle_kind_unknown() {
        let err = "hovercraft".parse::<VehicleKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownVehicleKind(ref k) if k == "hovercraft"));
    }

    #[test]
    fn test_vehicle_kind_display_round_trips() {
        for kind in [VehicleKind::Car, VehicleKind::Truck, VehicleKind::ElectricCar] {
            assert_eq!(kind.to_string().parse::<VehicleKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_vehicle_kind_serde_names() {
        let json = serde_json::to_string(&VehicleKind::ElectricCar).unwrap();
        assert_eq!(json, "\"electric-car\"");
        let kind: VehicleKind = serde_json::from_str("\"ev\"").unwrap();
        assert_eq!(kind, VehicleKind::ElectricCar);
    }

    #[test]
    fn test_vehicle_kind_deserialize_ignores_case() {
        let kind: VehicleKind = serde_json::from_str("\"Car\"").unwrap();
        assert_eq!(kind, VehicleKind::Car);
        let kind: VehicleKind = serde_json::from_str("\"ElectricCar\"").unwrap();
        assert_eq!(kind, VehicleKind::ElectricCar);
    }

    #[test]
    fn test_vehicle_kind_deserialize_unknown() {
        let err = serde_json::from_str::<VehicleKind>("\"Boat\"").unwrap_err();
        assert!(err.to_string().contains("Unknown vehicle kind: Boat"));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }
}
