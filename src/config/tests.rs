//! Tests for validator config loading.

use crate::config::{CycleCheck, ValidatorConfig};
use crate::error::SpecError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = ValidatorConfig::default();

    assert_eq!(config.cycle_check, CycleCheck::All);
    assert!(!config.check_task_fields);
    assert!(!config.canonical_tools_only);
    assert_eq!(config.agent_file_pattern, "*.md");
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_parse_empty_yaml() {
    let config = ValidatorConfig::from_yaml("").unwrap();
    assert_eq!(config, ValidatorConfig::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
cycle_check: dag_only
check_task_fields: true
"#;
    let config = ValidatorConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.cycle_check, CycleCheck::DagOnly);
    assert!(config.check_task_fields);
    assert!(!config.canonical_tools_only);
    assert_eq!(config.agent_file_pattern, "*.md");
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
log_level: debug
generator_backend: handlebars
"#;
    let config = ValidatorConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_invalid_cycle_check_is_config_error() {
    let err = ValidatorConfig::from_yaml("cycle_check: sometimes\n").unwrap_err();
    assert!(matches!(err, SpecError::ConfigError(_)));
}

#[test]
fn test_invalid_glob_rejected() {
    let err = ValidatorConfig::from_yaml("agent_file_pattern: \"agents/[.md\"\n").unwrap_err();
    assert!(matches!(err, SpecError::ConfigError(_)));
    assert!(err.to_string().contains("agent_file_pattern"));
}

#[test]
fn test_empty_glob_rejected() {
    let err = ValidatorConfig::from_yaml("agent_file_pattern: \"  \"\n").unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn test_unknown_log_level_rejected() {
    let err = ValidatorConfig::from_yaml("log_level: verbose\n").unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::CONFIG_ERROR);
    assert!(err.to_string().contains("verbose"));
}

#[test]
fn test_cycle_check_from_str() {
    assert_eq!(CycleCheck::from_str("all"), Some(CycleCheck::All));
    assert_eq!(CycleCheck::from_str("dag_only"), Some(CycleCheck::DagOnly));
    assert_eq!(CycleCheck::from_str("dag-only"), None);
    assert_eq!(CycleCheck::DagOnly.as_str(), "dag_only");
}

#[test]
fn test_yaml_round_trip() {
    let config = ValidatorConfig {
        cycle_check: CycleCheck::DagOnly,
        canonical_tools_only: true,
        ..ValidatorConfig::default()
    };
    let yaml = config.to_yaml().unwrap();
    assert_eq!(ValidatorConfig::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("masctl.yaml");
    fs::write(&path, "canonical_tools_only: true\n").unwrap();

    let config = ValidatorConfig::load(&path).unwrap();
    assert!(config.canonical_tools_only);
}

#[test]
fn test_load_missing_file_is_user_error() {
    let temp = TempDir::new().unwrap();
    let err = ValidatorConfig::load(temp.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, SpecError::UserError(_)));
}
