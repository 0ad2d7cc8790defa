//! Error types for fleetwise

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Every failure surfaces here and terminates the current command.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown vehicle kind: {0}")]
    UnknownVehicleKind(String),

    #[error("Unknown maintenance tool: {0}")]
    UnknownTool(String),

    #[error("Roster error: {0}")]
    Roster(String),
}

pub type Result<T> = std::result::Result<T, Error>;
