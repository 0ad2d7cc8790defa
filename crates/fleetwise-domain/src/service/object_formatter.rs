//! JSON rendering of vehicle details
//!
//! Output uses `": "` and `", "` separators and escapes DEL and
//! everything outside ASCII as `\uXXXX`:
//! `{"VehicleMake": "Toyota", "VehicleModel": "Camry", "VehicleYear": 2018}`

use std::io;

use fleetwise_types::{Error, Result};
use serde::Serialize;
use serde_json::ser::Formatter;

use crate::model::Vehicle;

/// Serialized shape of a vehicle; field order is the key order
#[derive(Debug, Clone, Serialize)]
pub struct VehicleDetails<'a> {
    #[serde(rename = "VehicleMake")]
    pub make: &'a str,
    #[serde(rename = "VehicleModel")]
    pub model: &'a str,
    #[serde(rename = "VehicleYear")]
    pub year: i32,
}

impl<'a> VehicleDetails<'a> {
    pub fn of(vehicle: &'a dyn Vehicle) -> Self {
        Self {
            make: vehicle.make(),
            model: vehicle.model(),
            year: vehicle.year(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectFormatter;

impl ObjectFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn vehicle_to_json(&self, vehicle: &dyn Vehicle) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
        VehicleDetails::of(vehicle).serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

/// Single-line JSON with spaced separators and ASCII-only strings
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() && ch != '\u{7f}' {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Car, ElectricCar, Truck};

    #[test]
    fn test_car_json() {
        let json = ObjectFormatter::new()
            .vehicle_to_json(&Car::new("Toyota", "Camry", 2018))
            .unwrap();
        assert_eq!(
            json,
            r#"{"VehicleMake": "Toyota", "VehicleModel": "Camry", "VehicleYear": 2018}"#
        );
    }

    #[test]
    fn test_truck_json() {
        let json = ObjectFormatter::new()
            .vehicle_to_json(&Truck::new("Ford", "F-150", 1980))
            .unwrap();
        assert_eq!(
            json,
            r#"{"VehicleMake": "Ford", "VehicleModel": "F-150", "VehicleYear": 1980}"#
        );
    }

    #[test]
    fn test_parses_back_to_vehicle_fields() {
        let ev = ElectricCar::new("Tesla", "Model 3", 2021);
        let json = ObjectFormatter::new().vehicle_to_json(&ev).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["VehicleMake"], "Tesla");
        assert_eq!(obj["VehicleModel"], "Model 3");
        assert_eq!(obj["VehicleYear"], 2021);

        let make = json.find("VehicleMake").unwrap();
        let model = json.find("VehicleModel").unwrap();
        let year = json.find("VehicleYear").unwrap();
        assert!(make < model && model < year);
    }

    #[test]
    fn test_escapes_quotes_and_control_chars() {
        let json = ObjectFormatter::new()
            .vehicle_to_json(&Car::new("Big \"Auto\"", "Line\nBreak", 2000))
            .unwrap();
        assert_eq!(
            json,
            r#"{"VehicleMake": "Big \"Auto\"", "VehicleModel": "Line\nBreak", "VehicleYear": 2000}"#
        );
    }

    #[test]
    fn test_escapes_non_ascii() {
        let json = ObjectFormatter::new()
            .vehicle_to_json(&Car::new("Citroën", "🚗", 2010))
            .unwrap();
        assert_eq!(
            json,
            r#"{"VehicleMake": "Citro\u00ebn", "VehicleModel": "\ud83d\ude97", "VehicleYear": 2010}"#
        );
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["VehicleMake"], "Citroën");
        assert_eq!(value["VehicleModel"], "🚗");
    }

    #[test]
    fn test_escapes_delete_char() {
        let json = ObjectFormatter::new()
            .vehicle_to_json(&Car::new("A\u{7f}", "B", 2000))
            .unwrap();
        assert_eq!(
            json,
            r#"{"VehicleMake": "A\u007f", "VehicleModel": "B", "VehicleYear": 2000}"#
        );
        assert!(json.bytes().all(|b| b.is_ascii() && b != 0x7f));
    }

    #[test]
    fn test_negative_year() {
        let json = ObjectFormatter::new()
            .vehicle_to_json(&Car::new("A", "B", -5))
            .unwrap();
        assert!(json.ends_with(r#""VehicleYear": -5}"#));
    }
}
