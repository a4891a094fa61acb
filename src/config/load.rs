use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::{DashboardError, Result},
    log_info,
};

use super::{ConfigValidator, DashboardConfig, CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};

impl DashboardConfig {
    /// Parse and validate a YAML document. Missing fields keep their defaults.
    pub fn from_yaml(config_yaml: &str) -> Result<Self> {
        let config: DashboardConfig = if config_yaml.trim().is_empty() {
            DashboardConfig::default()
        } else {
            serde_yaml::from_str(config_yaml)?
        };

        ConfigValidator::validate(&config).map_err(DashboardError::ConfigError)?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path)?;
        Self::from_yaml(&config_content)
    }

    /// Resolve the config file (`$LITTERBOX_CONFIG`, then `./dashboard.yml`).
    /// A missing default file is not an error; a missing explicit one is.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(explicit) if !explicit.is_empty() => {
                let path = PathBuf::from(explicit);
                log_info!("Loading config from {}", path.display());
                Self::load_from_path(&path)
            }
            _ => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    log_info!("Loading config from {}", path.display());
                    Self::load_from_path(path)
                } else {
                    log_info!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
                    Ok(DashboardConfig::default())
                }
            }
        }
    }
}
