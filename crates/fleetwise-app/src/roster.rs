//! Vehicle roster loader from TOML
//!
//! ```toml
//! [[vehicles]]
//! kind = "car"
//! make = "Toyota"
//! model = "Camry"
//! year = 2018
//! ```

use fleetwise_domain::model::AnyVehicle;
use fleetwise_types::{Error, Result, VehicleKind};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One `[[vehicles]]` table
#[derive(Debug, Clone, Deserialize)]
struct RosterEntry {
    kind: VehicleKind,
    make: String,
    model: String,
    year: i32,
}

/// Container for parsing roster files
#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    vehicles: Vec<RosterEntry>,
}

/// Vehicles listed in a roster file, in file order
#[derive(Debug, Clone, Default)]
pub struct Roster {
    vehicles: Vec<AnyVehicle>,
}

impl Roster {
    /// Load a roster from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Roster(format!("Failed to read roster file {}: {}", path.display(), e))
        })?;

        let roster = Self::load_from_str(&content)?;
        debug!(path = %path.display(), count = roster.len(), "loaded roster");
        Ok(roster)
    }

    /// Load a roster from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: RosterFile = toml::from_str(toml_content)
            .map_err(|e| Error::Roster(format!("Failed to parse roster TOML: {}", e)))?;

        let vehicles = file
            .vehicles
            .into_iter()
            .map(|entry| AnyVehicle::new(entry.kind, entry.make, entry.model, entry.year))
            .collect();

        Ok(Self { vehicles })
    }

    pub fn vehicles(&self) -> &[AnyVehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
