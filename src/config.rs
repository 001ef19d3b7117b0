use std::path::Path;

use log::warn;

use crate::ai::{SearchConfig, StreakHeuristic};
use crate::error::ConfigError;
use crate::session::SessionConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let search = &self.search;
        if search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        // Written as negated positive checks so NaN fails every rule.
        if !(search.two_weight.is_finite() && search.three_weight.is_finite()) {
            return Err(ConfigError::Validation("search weights must be finite".into()));
        }
        if !(search.two_weight > 0.0) {
            return Err(ConfigError::Validation("search.two_weight must be > 0".into()));
        }
        if !(search.three_weight > search.two_weight) {
            return Err(ConfigError::Validation(
                "search.three_weight must be > search.two_weight".into(),
            ));
        }

        // Decided positions must outrank every heuristic score.
        let bound = StreakHeuristic::new(search.three_weight, search.two_weight).max_score();
        if !(search.win_score > bound) {
            return Err(ConfigError::Validation(format!(
                "search.win_score must be > {bound} (largest heuristic score)"
            )));
        }
        if !(search.loss_score < -bound) {
            return Err(ConfigError::Validation(format!(
                "search.loss_score must be < -{bound} (largest heuristic score)"
            )));
        }

        if self.session.record_history && self.session.history_file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "session.history_file must be set when record_history is on".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
