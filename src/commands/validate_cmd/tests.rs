//! Tests for the validate command.

use super::*;
use crate::exit_codes;
use crate::validate::ViolationKind;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const LEAD: &str = "---\nname: lead\ndescription: Coordinates the team\nmodel: opus\ndependencies: [fetcher]\n---\nYou coordinate.\n";
const FETCHER: &str =
    "---\nname: fetcher\ndescription: Fetches data\ntools: WebFetch, Read\n---\nYou fetch.\n";

const TEAM: &str = r#"{"name":"stats-team","version":"1.0.0","agents":["lead","fetcher"],"orchestrator":"lead","workflow":{"type":"dag","steps":[{"name":"fetch","agent":"fetcher","outputs":[{"name":"rows","type":"array"}]},{"name":"report","agent":"lead","depends_on":["fetch"],"inputs":[{"name":"rows","type":"array","from":"fetch.rows"}]}]}}"#;

const DEPLOYMENT: &str = r#"
team: stats-team
targets:
  - name: local
    platform: claude-code
    priority: p1
    output: .claude/agents
  - name: k8s
    platform: kubernetes
    output: deploy/k8s
    config:
      namespace: stats
"#;

/// Write a valid agents dir, team and deployment into a temp dir.
fn write_fixture(temp: &TempDir) -> ValidateArgs {
    let agents = temp.path().join("agents");
    fs::create_dir(&agents).unwrap();
    fs::write(agents.join("lead.md"), LEAD).unwrap();
    fs::write(agents.join("fetcher.md"), FETCHER).unwrap();
    fs::write(agents.join("NOTES.txt"), "not an agent").unwrap();

    let team = temp.path().join("team.json");
    fs::write(&team, TEAM).unwrap();

    let deployment = temp.path().join("deployment.yaml");
    fs::write(&deployment, DEPLOYMENT).unwrap();

    ValidateArgs {
        agents: Some(agents),
        team: Some(team),
        deployment: Some(deployment),
        config: None,
        json: false,
    }
}

fn write(path: &Path, content: &str) -> PathBuf {
    fs::write(path, content).unwrap();
    path.to_path_buf()
}

#[test]
fn test_valid_fixture_passes() {
    let temp = TempDir::new().unwrap();
    let args = write_fixture(&temp);
    let config = ValidatorConfig::default();

    let inputs = load_inputs(&args, &config).unwrap();
    assert_eq!(inputs.agents.as_ref().unwrap().len(), 2);

    let report = run_checks(&inputs, &config);
    assert!(report.passed(), "{}", report.format_error());
    assert_eq!(
        render_summary(&inputs),
        "Validation passed: 2 agents, team 'stats-team', deployment with 2 targets"
    );

    cmd_validate(args, &config).unwrap();
}

#[test]
fn test_nothing_to_validate() {
    let args = ValidateArgs {
        agents: None,
        team: None,
        deployment: None,
        config: None,
        json: false,
    };
    let err = load_inputs(&args, &ValidatorConfig::default()).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}

#[test]
fn test_violations_exit_with_validation_failure() {
    let temp = TempDir::new().unwrap();
    let mut args = write_fixture(&temp);
    args.team = Some(write(
        &temp.path().join("team.yaml"),
        "name: stats-team\nversion: 1.0.0\nagents: [lead, fetcher, writer]\norchestrator: boss\n",
    ));

    let config = ValidatorConfig::default();
    let report = run_checks(&load_inputs(&args, &config).unwrap(), &config);
    let kinds: Vec<ViolationKind> = report.violations.iter().map(|v| v.kind).collect();
    assert_eq!(
        kinds,
        vec![ViolationKind::UnknownReference, ViolationKind::UnknownReference]
    );

    let err = cmd_validate(args, &config).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
    assert!(err.to_string().contains("team.orchestrator"));
    assert!(err.to_string().contains("team.agents[2]"));
}

#[test]
fn test_json_failure_reports_headline() {
    let temp = TempDir::new().unwrap();
    let mut args = write_fixture(&temp);
    args.deployment = Some(write(
        &temp.path().join("deployment.json"),
        r#"{"team":"other-team","targets":[]}"#,
    ));
    args.json = true;

    let config = ValidatorConfig::default();
    let report = run_checks(&load_inputs(&args, &config).unwrap(), &config);
    let json = render_json(&report).unwrap();
    assert!(json.contains("\"passed\": false"));
    assert!(json.contains("\"kind\": \"mismatch\""));

    let err = cmd_validate(args, &config).unwrap_err();
    assert_eq!(err.to_string(), "Validation failed: 2 violations found");
}

#[test]
fn test_bad_target_config_is_shape_error() {
    let temp = TempDir::new().unwrap();
    let mut args = write_fixture(&temp);
    args.deployment = Some(write(
        &temp.path().join("deployment.yaml"),
        "team: stats-team\ntargets:\n  - name: local\n    platform: agentkit-local\n    output: out\n    config:\n      transport: pigeon\n",
    ));

    let err = load_inputs(&args, &ValidatorConfig::default()).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::SHAPE_ERROR);
    assert!(err.to_string().contains("target 'local'"));
}

#[test]
fn test_agent_file_pattern_from_config() {
    let temp = TempDir::new().unwrap();
    let mut args = write_fixture(&temp);
    args.team = None;
    args.deployment = None;

    let config = ValidatorConfig {
        agent_file_pattern: "lead*".to_string(),
        ..ValidatorConfig::default()
    };
    let inputs = load_inputs(&args, &config).unwrap();
    let agents = inputs.agents.unwrap();
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0].name, "lead");
}

#[test]
fn test_unsupported_extension_is_user_error() {
    let temp = TempDir::new().unwrap();
    let args = ValidateArgs {
        agents: None,
        team: Some(write(&temp.path().join("team.toml"), "name = 'x'")),
        deployment: None,
        config: None,
        json: false,
    };
    let err = load_inputs(&args, &ValidatorConfig::default()).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}
