pub mod calendar_config;

use serde::{Deserialize, Serialize};

pub use calendar_config::{CalendarConfig, IndexPolicy};

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PtuConfig {
    pub calendar: CalendarConfig,
}

impl PtuConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }
}
