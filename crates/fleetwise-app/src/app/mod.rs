//! Use cases behind the CLI subcommands

pub mod vehicle_service;

pub use vehicle_service::{
    describe_vehicle, energize_vehicle, quote_roster, quote_vehicle, service_vehicle,
};
