mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "campusnav.yaml";

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            state_dir: default_state_dir(),
            catalog: CatalogConfig::default(),
            markers: MarkersConfig::default(),
            search: SearchConfig::default(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, falling back to defaults when the implicit
    /// default file is absent. An explicitly named file must exist.
    pub fn load_or_default(path: &Path, explicit: bool) -> Result<Self, ConfigError> {
        if !explicit && !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.markers.max_markers == 0 {
            return Err(ConfigError::Invalid {
                field: "markers.max_markers",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.navigation.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "navigation.poll_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }

        let thresholds = [
            (
                "navigation.reroute_threshold_m",
                self.navigation.reroute_threshold_m,
            ),
            (
                "navigation.arrival_radius_m",
                self.navigation.arrival_radius_m,
            ),
        ];
        for (field, value) in thresholds {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a positive distance, got {}", value),
                });
            }
        }

        Ok(())
    }
}
