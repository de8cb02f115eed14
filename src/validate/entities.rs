//! Per-entity checks.
//!
//! The `check_*` functions append to a shared violation list under a path
//! prefix so the same checks serve single documents and bundles.

use super::graph::find_cycles;
use super::names::{is_valid_name, is_valid_version};
use super::types::{ValidationReport, Violation, ViolationKind};
use crate::agent::{Agent, Task, TaskType};
use crate::config::{CycleCheck, ValidatorConfig};
use crate::deployment::Deployment;
use crate::team::{PortRef, Step, Team, Workflow, WorkflowType};
use crate::vocabulary::Tool;
use std::collections::{HashMap, HashSet};

const NAME_RULE: &str =
    "must start with a lowercase letter and contain only lowercase letters, digits and hyphens";

/// Validate a single agent definition.
pub fn validate_agent(agent: &Agent, config: &ValidatorConfig) -> ValidationReport {
    let mut violations = Vec::new();
    check_agent(agent, "agent", config, &mut violations);
    ValidationReport::from_violations(violations)
}

/// Validate a team and its workflow.
pub fn validate_team(team: &Team, config: &ValidatorConfig) -> ValidationReport {
    let mut violations = Vec::new();
    check_team(team, config, &mut violations);
    ValidationReport::from_violations(violations)
}

/// Validate a deployment's target list.
pub fn validate_deployment(deployment: &Deployment) -> ValidationReport {
    let mut violations = Vec::new();
    check_deployment(deployment, &mut violations);
    ValidationReport::from_violations(violations)
}

pub(super) fn check_agent(
    agent: &Agent,
    prefix: &str,
    config: &ValidatorConfig,
    out: &mut Vec<Violation>,
) {
    if !is_valid_name(&agent.name) {
        out.push(Violation::new(
            ViolationKind::InvalidName,
            format!("{prefix}.name"),
            format!("agent name '{}' {}", agent.name, NAME_RULE),
        ));
    }

    let mut ids = HashSet::new();
    for (i, task) in agent.tasks().iter().enumerate() {
        let path = format!("{prefix}.tasks[{i}]");
        if !ids.insert(task.id.as_str()) {
            out.push(Violation::new(
                ViolationKind::Duplicate,
                format!("{path}.id"),
                format!("duplicate task id '{}'", task.id),
            ));
        }
        if config.check_task_fields {
            check_task_fields(task, &path, out);
        }
    }

    if config.canonical_tools_only {
        for (i, tool) in agent.tools().iter().enumerate() {
            if Tool::from_str(tool).is_none() {
                out.push(Violation::new(
                    ViolationKind::NonCanonicalTool,
                    format!("{prefix}.tools[{i}]"),
                    format!("'{}' is not a canonical tool name", tool),
                ));
            }
        }
    }
}

fn check_task_fields(task: &Task, path: &str, out: &mut Vec<Violation>) {
    let missing = |field: &Option<String>| field.as_deref().is_none_or(str::is_empty);

    let (field, absent) = match task.effective_type() {
        TaskType::Command => ("command", missing(&task.command)),
        TaskType::Pattern => ("pattern", missing(&task.pattern)),
        TaskType::File => (
            "file",
            missing(&task.file) && task.files.as_ref().is_none_or(Vec::is_empty),
        ),
        TaskType::Manual => return,
    };

    if absent {
        out.push(Violation::new(
            ViolationKind::MissingTaskField,
            format!("{path}.{field}"),
            format!(
                "{} task '{}' does not set {}",
                task.effective_type().as_str(),
                task.id,
                field
            ),
        ));
    }
}

pub(super) fn check_team(team: &Team, config: &ValidatorConfig, out: &mut Vec<Violation>) {
    if !is_valid_name(&team.name) {
        out.push(Violation::new(
            ViolationKind::InvalidName,
            "team.name",
            format!("team name '{}' {}", team.name, NAME_RULE),
        ));
    }

    if !is_valid_version(&team.version) {
        out.push(Violation::new(
            ViolationKind::InvalidVersion,
            "team.version",
            format!("version '{}' is not of the form X.Y.Z", team.version),
        ));
    }

    if team.agents.is_empty() {
        out.push(Violation::new(
            ViolationKind::Empty,
            "team.agents",
            "team has no agents",
        ));
    }

    if let Some(orchestrator) = &team.orchestrator
        && !team.has_agent(orchestrator)
    {
        out.push(Violation::new(
            ViolationKind::UnknownReference,
            "team.orchestrator",
            format!("orchestrator '{}' is not one of the team's agents", orchestrator),
        ));
    }

    if let Some(workflow) = &team.workflow {
        check_workflow(workflow, team, config, out);
    }
}

fn check_workflow(
    workflow: &Workflow,
    team: &Team,
    config: &ValidatorConfig,
    out: &mut Vec<Violation>,
) {
    let steps = workflow.steps();
    let mut index: HashMap<&str, &Step> = HashMap::new();
    for step in steps {
        index.entry(step.name.as_str()).or_insert(step);
    }
    let mut names = HashSet::new();

    for (i, step) in steps.iter().enumerate() {
        let path = format!("workflow.steps[{i}]");

        if !names.insert(step.name.as_str()) {
            out.push(Violation::new(
                ViolationKind::Duplicate,
                format!("{path}.name"),
                format!("duplicate step name '{}'", step.name),
            ));
        }

        if !team.has_agent(&step.agent) {
            out.push(Violation::new(
                ViolationKind::UnknownReference,
                format!("{path}.agent"),
                format!(
                    "step '{}' runs agent '{}', which is not in the team",
                    step.name, step.agent
                ),
            ));
        }

        for (j, dep) in step.depends_on().iter().enumerate() {
            if !index.contains_key(dep.as_str()) {
                out.push(Violation::new(
                    ViolationKind::UnknownReference,
                    format!("{path}.depends_on[{j}]"),
                    format!("unknown step '{}'", dep),
                ));
            }
        }

        for (j, input) in step.inputs().iter().enumerate() {
            let Some(reference) = &input.from else {
                continue;
            };
            let field = format!("{path}.inputs[{j}].from");
            let Some(first) = PortRef::parse(reference) else {
                out.push(Violation::new(
                    ViolationKind::MalformedReference,
                    field,
                    format!("'{}' is not of the form step.output", reference),
                ));
                continue;
            };
            let resolved = PortRef::splits(reference)
                .find_map(|r| index.get(r.step).map(|upstream| (*upstream, r)));
            match resolved {
                None => out.push(Violation::new(
                    ViolationKind::UnknownReference,
                    field,
                    format!("unknown step '{}'", first.step),
                )),
                Some((upstream, source)) if upstream.output(source.port).is_none() => {
                    out.push(Violation::new(
                        ViolationKind::UnknownReference,
                        field,
                        format!("step '{}' has no output '{}'", source.step, source.port),
                    ))
                }
                Some(_) => {}
            }
        }

        for (j, output) in step.outputs().iter().enumerate() {
            if output.from.is_some() {
                out.push(Violation::new(
                    ViolationKind::MisplacedField,
                    format!("{path}.outputs[{j}].from"),
                    format!("output '{}' sets from, which only applies to inputs", output.name),
                ));
            }
        }
    }

    let check_cycles = match config.cycle_check {
        CycleCheck::All => true,
        CycleCheck::DagOnly => workflow.effective_type() == WorkflowType::Dag,
    };
    if check_cycles {
        for cycle in find_cycles(steps) {
            let i = steps
                .iter()
                .position(|s| s.name == cycle[0])
                .unwrap_or_default();
            out.push(Violation::new(
                ViolationKind::Cycle,
                format!("workflow.steps[{i}].depends_on"),
                format!("dependency cycle: {}", cycle.join(" -> ")),
            ));
        }
    }
}

pub(super) fn check_deployment(deployment: &Deployment, out: &mut Vec<Violation>) {
    if deployment.targets.is_empty() {
        out.push(Violation::new(
            ViolationKind::Empty,
            "deployment.targets",
            "deployment has no targets",
        ));
    }

    let mut names = HashSet::new();
    for (i, target) in deployment.targets.iter().enumerate() {
        if !names.insert(target.name.as_str()) {
            out.push(Violation::new(
                ViolationKind::Duplicate,
                format!("deployment.targets[{i}].name"),
                format!("duplicate target name '{}'", target.name),
            ));
        }
    }
}
