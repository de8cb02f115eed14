//! Output formatting for the validate command.

use super::load::Inputs;
use crate::error::{Result, SpecError};
use crate::validate::{ValidationReport, Violation};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    violations: &'a [Violation],
}

/// Machine-readable report.
pub fn render_json(report: &ValidationReport) -> Result<String> {
    let json = JsonReport {
        passed: report.passed(),
        violations: &report.violations,
    };
    serde_json::to_string_pretty(&json)
        .map_err(|e| SpecError::UserError(format!("failed to encode report: {}", e)))
}

/// One-line summary of what passed.
pub fn render_summary(inputs: &Inputs) -> String {
    let mut parts = Vec::new();
    if let Some(agents) = &inputs.agents {
        parts.push(format!(
            "{} agent{}",
            agents.len(),
            if agents.len() == 1 { "" } else { "s" }
        ));
    }
    if let Some(team) = &inputs.team {
        parts.push(format!("team '{}'", team.name));
    }
    if let Some(deployment) = &inputs.deployment {
        let n = deployment.targets.len();
        parts.push(format!(
            "deployment with {} target{}",
            n,
            if n == 1 { "" } else { "s" }
        ));
    }
    format!("Validation passed: {}", parts.join(", "))
}
