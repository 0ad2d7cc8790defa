//! Base vehicle entity and the insurance contract every variant fulfils

use fleetwise_types::VehicleKind;
use serde::{Deserialize, Serialize};

/// Year that vehicle age is measured against for insurance tiers
pub const REFERENCE_YEAR: i32 = 2024;

/// Attributes shared by every vehicle variant
///
/// Set once at construction and never mutated. Inputs are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl VehicleInfo {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
        }
    }

    /// Age in years relative to `reference_year`; negative for future model years
    pub fn age_at(&self, reference_year: i32) -> i64 {
        i64::from(reference_year) - i64::from(self.year)
    }
}

/// Polymorphic vehicle contract
pub trait Vehicle {
    fn info(&self) -> &VehicleInfo;

    fn kind(&self) -> VehicleKind;

    /// Variant-specific insurance step function evaluated at `reference_year`
    fn insurance_cost_at(&self, reference_year: i32) -> u32;

    /// Insurance cost against [`REFERENCE_YEAR`]
    fn calculate_insurance_cost(&self) -> u32 {
        self.insurance_cost_at(REFERENCE_YEAR)
    }

    fn make(&self) -> &str {
        &self.info().make
    }

    fn model(&self) -> &str {
        &self.info().model
    }

    fn year(&self) -> i32 {
        self.info().year
    }
}
