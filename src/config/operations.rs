//! Config loading and validation.

use super::model::ValidatorConfig;
use super::types::LOG_LEVELS;
use crate::error::{Result, SpecError};
use globset::Glob;
use std::path::Path;

impl ValidatorConfig {
    /// Load config from a YAML file.
    ///
    /// A missing or unreadable file is a user error; bad contents are a
    /// config error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SpecError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), "loaded validator config");
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields are silently ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ValidatorConfig = serde_yaml::from_str(yaml)
            .map_err(|e| SpecError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SpecError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Check field values.
    ///
    /// - `agent_file_pattern` must be a non-empty, valid glob
    /// - `log_level` must be one of trace, debug, info, warn, error or off
    pub fn validate(&self) -> Result<()> {
        if self.agent_file_pattern.trim().is_empty() {
            return Err(SpecError::ConfigError(
                "agent_file_pattern must be non-empty".to_string(),
            ));
        }

        if let Err(e) = Glob::new(&self.agent_file_pattern) {
            return Err(SpecError::ConfigError(format!(
                "invalid glob pattern '{}' in agent_file_pattern: {}",
                self.agent_file_pattern, e
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(SpecError::ConfigError(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }
}
