//! Configuration management for fleetwise
//!
//! Config stored at: ~/.config/fleetwise/config.json

use fleetwise_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Flat amount added to the base insurance cost when displayed
    #[serde(default = "default_display_surcharge")]
    pub display_surcharge: u32,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Maintenance tool used when none is given (brake, oil, battery)
    #[serde(default = "default_tool")]
    pub default_tool: String,
}

fn default_display_surcharge() -> u32 {
    100
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_tool() -> String {
    "brake".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_surcharge: default_display_surcharge(),
            output_format: default_output_format(),
            default_tool: default_tool(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fleetwise");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or fall back to defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!("{}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fleetwise Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Display surcharge: ${}", self.display_surcharge)?;
        writeln!(f, "Output format:     {}", self.output_format)?;
        writeln!(f, "Default tool:      {}", self.default_tool)?;
        Ok(())
    }
}
