//! Single-behavior capability contracts a vehicle may implement
//!
//! Capabilities are behavior only. A variant opts into each one
//! independently of the others.

use std::io::Write;

use fleetwise_types::Result;

/// A vehicle that can take on liquid fuel
pub trait Fuelable {
    /// Write a description of the fuel action to `out`
    fn refuel(&self, out: &mut dyn Write) -> Result<()>;
}

/// A vehicle that can be recharged from the grid
pub trait Rechargeable {
    /// Write a description of the recharge action to `out`
    fn recharge(&self, out: &mut dyn Write) -> Result<()>;
}
