//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use fleetwise_types::{OutputFormat, VehicleKind};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fleetwise")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Vehicle insurance quotes, JSON details, and maintenance")]
#[command(long_about = None)]
pub struct Cli {
    /// Defaults to the demonstration scenario
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Positional description of a single vehicle
#[derive(Args, Debug, Clone)]
pub struct VehicleArgs {
    /// Vehicle kind (car, truck, electric-car)
    #[arg(value_parser = parse_vehicle_kind)]
    pub kind: VehicleKind,

    /// Manufacturer, e.g. "Toyota"
    pub make: String,

    /// Model name, e.g. "Camry"
    pub model: String,

    /// Model year
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}

fn parse_vehicle_kind(value: &str) -> Result<VehicleKind, String> {
    value.parse::<VehicleKind>().map_err(|e| e.to_string())
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the fixed demonstration scenario
    Demo,

    /// Quote insurance for one vehicle
    Quote {
        #[command(flatten)]
        vehicle: VehicleArgs,

        /// Display surcharge. Uses config value if not specified.
        #[arg(long, short = 's')]
        surcharge: Option<u32>,
    },

    /// Print a vehicle's details as JSON
    Describe {
        #[command(flatten)]
        vehicle: VehicleArgs,
    },

    /// Service a vehicle with a maintenance tool
    Service {
        #[command(flatten)]
        vehicle: VehicleArgs,

        /// Maintenance tool (brake, oil, battery). Uses config value if not specified.
        #[arg(long, short = 't')]
        tool: Option<String>,
    },

    /// Refuel or recharge a vehicle, whichever it supports
    Refuel {
        #[command(flatten)]
        vehicle: VehicleArgs,
    },

    /// Quote every vehicle listed in a TOML roster
    Roster {
        /// Path to roster file
        file: PathBuf,

        /// Display surcharge. Uses config value if not specified.
        #[arg(long, short = 's')]
        surcharge: Option<u32>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Write the default configuration file
        #[arg(long)]
        init: bool,

        /// Set display surcharge
        #[arg(long)]
        set_surcharge: Option<u32>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default maintenance tool
        #[arg(long)]
        set_tool: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
