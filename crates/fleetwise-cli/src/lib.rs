//! Fleetwise CLI - vehicle insurance, formatting, and maintenance demo
//!
//! Library half of the `fleetwise` binary so the command layer can be
//! driven from integration tests.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
