//! Resolve engine configuration from file and command-line overrides

use shared::{EngineConfig, CONFIG_FILE_NAME};
use std::path::{Path, PathBuf};

/// Overrides collected from global CLI flags
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub domain: Option<String>,
}

/// Load configuration.
///
/// An explicit `--config` path must exist. Otherwise `dvnc.json` in the
/// working directory is used if present, else defaults.
pub fn resolve(overrides: &Overrides, cwd: &Path) -> anyhow::Result<EngineConfig> {
    let mut config = match &overrides.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => {
            let local = cwd.join(CONFIG_FILE_NAME);
            if local.exists() {
                tracing::debug!(path = %local.display(), "Loading local config");
                EngineConfig::from_file(&local)?
            } else {
                EngineConfig::default()
            }
        }
    };

    if let Some(seed) = overrides.seed {
        config.seed = seed;
    }
    if let Some(domain) = &overrides.domain {
        config.included_domain = domain.clone();
    }

    config.validate()?;
    Ok(config)
}
