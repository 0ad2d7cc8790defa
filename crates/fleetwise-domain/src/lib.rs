//! Domain layer for fleetwise
//!
//! Vehicle variants, the capability traits they implement, and the
//! services that operate on any vehicle through those traits.

pub mod model;
pub mod service;
