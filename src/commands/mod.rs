//! Command implementations for masctl.
//!
//! This module routes parsed CLI commands to their implementations.

mod map;
mod targets;
mod validate_cmd;

use crate::cli::Command;
use crate::config::ValidatorConfig;
use crate::deployment::Platform;
use crate::error::{Result, SpecError};
use std::path::Path;

pub use map::{map_model_output, map_tool_output};
pub use targets::render_targets;
pub use validate_cmd::{Inputs, cmd_validate, load_inputs, run_checks};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &ValidatorConfig) -> Result<()> {
    match command {
        Command::Validate(args) => cmd_validate(args, config),
        Command::MapModel(args) => map::cmd_map_model(args),
        Command::MapTool(args) => map::cmd_map_tool(args),
        Command::Targets(args) => targets::cmd_targets(args),
    }
}

/// Load the validator config, falling back to defaults when no file is named.
pub fn load_config(path: Option<&Path>) -> Result<ValidatorConfig> {
    match path {
        Some(path) => ValidatorConfig::load(path),
        None => Ok(ValidatorConfig::default()),
    }
}

/// Parse a platform argument.
pub(crate) fn parse_platform(s: &str) -> Result<Platform> {
    Platform::from_str(s).ok_or_else(|| {
        SpecError::UserError(format!(
            "unknown platform '{}'.\n\nExpected one of: {}",
            s,
            Platform::ALL.map(|p| p.as_str()).join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CycleCheck;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_platform() {
        assert_eq!(parse_platform("gcp-gke").unwrap(), Platform::GcpGke);

        let err = parse_platform("heroku").unwrap_err();
        assert!(matches!(err, SpecError::UserError(_)));
        assert!(err.to_string().contains("agentkit-local"));
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), ValidatorConfig::default());
    }

    #[test]
    fn test_load_config_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("masctl.yaml");
        fs::write(&path, "cycle_check: dag_only\n").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.cycle_check, CycleCheck::DagOnly);
    }
}
