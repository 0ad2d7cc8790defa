//! Application service layer - config, roster loading, use cases

pub mod app;
pub mod config;
pub mod demo;
pub mod roster;
pub mod tools;
