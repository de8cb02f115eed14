//! Checks across a loaded set of agents, a team and a deployment.

use super::entities::{check_agent, check_deployment, check_team};
use super::types::{ValidationReport, Violation, ViolationKind};
use crate::agent::Agent;
use crate::config::ValidatorConfig;
use crate::deployment::Deployment;
use crate::team::Team;
use std::collections::HashSet;

/// Validate whatever parts of a system definition are present.
///
/// Each part gets its own checks. Cross-references are checked only when
/// both sides are present: team members and agent dependencies against the
/// loaded agents, and the deployment's team against the team name.
pub fn validate_bundle(
    agents: Option<&[Agent]>,
    team: Option<&Team>,
    deployment: Option<&Deployment>,
    config: &ValidatorConfig,
) -> ValidationReport {
    let mut violations = Vec::new();

    if let Some(agents) = agents {
        let mut seen = HashSet::new();
        for (i, agent) in agents.iter().enumerate() {
            let prefix = format!("agents[{i}]");
            check_agent(agent, &prefix, config, &mut violations);
            if !seen.insert(agent.name.as_str()) {
                violations.push(Violation::new(
                    ViolationKind::Duplicate,
                    format!("{prefix}.name"),
                    format!("duplicate agent name '{}'", agent.name),
                ));
            }
        }

        let defined: HashSet<&str> = agents.iter().map(|a| a.name.as_str()).collect();
        for (i, agent) in agents.iter().enumerate() {
            for (j, dep) in agent.dependencies().iter().enumerate() {
                if !defined.contains(dep.as_str()) {
                    violations.push(Violation::new(
                        ViolationKind::UnknownReference,
                        format!("agents[{i}].dependencies[{j}]"),
                        format!("agent '{}' depends on unknown agent '{}'", agent.name, dep),
                    ));
                }
            }
        }

        if let Some(team) = team {
            for (j, member) in team.agents.iter().enumerate() {
                if !defined.contains(member.as_str()) {
                    violations.push(Violation::new(
                        ViolationKind::UnknownReference,
                        format!("team.agents[{j}]"),
                        format!("no definition loaded for agent '{}'", member),
                    ));
                }
            }
        }
    }

    if let Some(team) = team {
        check_team(team, config, &mut violations);
    }

    if let Some(deployment) = deployment {
        check_deployment(deployment, &mut violations);
        if let Some(team) = team
            && deployment.team != team.name
        {
            violations.push(Violation::new(
                ViolationKind::Mismatch,
                "deployment.team",
                format!(
                    "deployment is for team '{}' but the team is '{}'",
                    deployment.team, team.name
                ),
            ));
        }
    }

    tracing::debug!(violations = violations.len(), "validated bundle");
    ValidationReport::from_violations(violations)
}
