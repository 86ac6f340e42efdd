//! Configuration types for DVNC

use crate::domain::{Domain, DEFAULT_INCLUDED_DOMAIN};
use crate::error::{DvncError, Result};
use serde::{Deserialize, Serialize};

/// Default file name written by `dvnc init`
pub const CONFIG_FILE_NAME: &str = "dvnc.json";

/// Engine and session configuration (dvnc.json)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Name of the configurable third domain
    pub included_domain: String,

    /// Seed for the orchestrator's random source
    pub seed: u64,

    /// Selection temperature shared by all experts
    pub temperature: f64,

    /// Maximum interactions kept in session history
    pub history_capacity: usize,

    /// Interactions shown by the history view
    pub recent_history: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            included_domain: DEFAULT_INCLUDED_DOMAIN.to_string(),
            seed: 42,
            temperature: 0.6,
            history_capacity: 50,
            recent_history: 5,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration as pretty JSON
    pub fn write_to(&self, path: &std::path::Path) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Check value ranges and that the included domain does not shadow a
    /// built-in one
    pub fn validate(&self) -> Result<()> {
        let included = Domain::included(&self.included_domain);
        if [Domain::Physics, Domain::Biomechanics]
            .iter()
            .any(|builtin| builtin.name().eq_ignore_ascii_case(included.name()))
        {
            return Err(DvncError::Config(format!(
                "includedDomain '{}' collides with a built-in domain",
                included
            )));
        }

        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(DvncError::Config(format!(
                "temperature must be within [0, 1], got {}",
                self.temperature
            )));
        }
        if self.history_capacity == 0 {
            return Err(DvncError::Config("historyCapacity must be at least 1".to_string()));
        }
        Ok(())
    }
}
