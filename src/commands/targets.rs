//! Implementation of the `targets` command.

use crate::cli::TargetsArgs;
use crate::deployment::{Deployment, PlatformConfig};
use crate::document::Document;
use crate::error::Result;

pub fn cmd_targets(args: TargetsArgs) -> Result<()> {
    let deployment = Deployment::load(&args.deployment)?;
    print!("{}", render_targets(&deployment)?);
    Ok(())
}

/// One line per target in priority order: priority, name, platform,
/// configuration variant and output path.
///
/// Fails on the first target whose configuration does not decode.
pub fn render_targets(deployment: &Deployment) -> Result<String> {
    let mut decoded = deployment.decode_configs()?;
    decoded.sort_by_key(|(target, _)| target.effective_priority());

    let name_width = decoded
        .iter()
        .map(|(t, _)| t.name.len())
        .max()
        .unwrap_or_default();

    let mut out = format!("Deployment of team '{}'\n\n", deployment.team);
    if decoded.is_empty() {
        out.push_str("  (no targets)\n");
        return Ok(out);
    }

    for (target, config) in &decoded {
        let variant = match config {
            Some(config) => config.label(),
            None if PlatformConfig::default_for(target.platform).is_some() => "defaults",
            None => "none",
        };
        out.push_str(&format!(
            "  {}  {:<name_width$}  {:<14}  {:<21}  {}\n",
            target.effective_priority().as_str(),
            target.name,
            target.platform.as_str(),
            variant,
            target.output,
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deployment::{KubernetesConfig, Platform, Priority, Target};
    use crate::error::SpecError;
    use serde_json::json;

    #[test]
    fn test_render_orders_by_priority() {
        let deployment = Deployment::new("stats-team")
            .add_target(Target::new("kiro", Platform::KiroCli, "plugins/kiro"))
            .add_target(
                Target::new("local", Platform::ClaudeCode, ".claude/agents")
                    .with_priority(Priority::P1),
            )
            .add_target(
                Target::new("gke", Platform::GcpGke, "deploy/gke")
                    .with_priority(Priority::P3)
                    .with_config(KubernetesConfig::default().into())
                    .unwrap(),
            )
            .add_target(Target::new("compose", Platform::DockerCompose, "deploy/compose"));

        let out = render_targets(&deployment).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Deployment of team 'stats-team'");
        assert!(lines[2].starts_with("  p1  local "));
        assert!(lines[3].starts_with("  p2  kiro "));
        assert!(lines[3].contains("defaults"));
        assert!(lines[4].starts_with("  p2  compose "));
        assert!(lines[4].contains("none"));
        assert!(lines[5].starts_with("  p3  gke "));
        assert!(lines[5].contains("kubernetes config"));
        assert!(lines[5].ends_with("deploy/gke"));
    }

    #[test]
    fn test_render_empty_deployment() {
        let out = render_targets(&Deployment::new("t")).unwrap();
        assert!(out.contains("(no targets)"));
    }

    #[test]
    fn test_render_fails_on_bad_config() {
        let deployment = Deployment::new("t").add_target(Target {
            name: "agentcore".to_string(),
            platform: Platform::AwsAgentCore,
            priority: None,
            output: "out".to_string(),
            config: Some(json!({"region": 5})),
        });

        let err = render_targets(&deployment).unwrap_err();
        assert!(matches!(err, SpecError::ShapeError(_)));
        assert!(err.to_string().contains("target 'agentcore'"));
    }
}
