//! Document loading for the validate command.

use crate::agent::{Agent, load_agents_dir};
use crate::cli::ValidateArgs;
use crate::config::ValidatorConfig;
use crate::deployment::Deployment;
use crate::document::Document;
use crate::error::{Result, SpecError};
use crate::team::Team;

/// Documents named on the command line.
#[derive(Debug, Default)]
pub struct Inputs {
    pub agents: Option<Vec<Agent>>,
    pub team: Option<Team>,
    pub deployment: Option<Deployment>,
}

/// Load every named document and decode target configurations.
///
/// Decode failures abort before any invariant is checked.
pub fn load_inputs(args: &ValidateArgs, config: &ValidatorConfig) -> Result<Inputs> {
    if args.agents.is_none() && args.team.is_none() && args.deployment.is_none() {
        return Err(SpecError::UserError(
            "nothing to validate.\n\nPass at least one of --agents, --team or --deployment."
                .to_string(),
        ));
    }

    let agents = match &args.agents {
        Some(dir) => {
            let agents = load_agents_dir(dir, &config.agent_file_pattern)?;
            if agents.is_empty() {
                tracing::warn!(
                    dir = %dir.display(),
                    pattern = %config.agent_file_pattern,
                    "no agent files matched"
                );
            }
            Some(agents)
        }
        None => None,
    };

    let team = args.team.as_deref().map(Team::load).transpose()?;
    let deployment = args.deployment.as_deref().map(Deployment::load).transpose()?;

    if let Some(deployment) = &deployment {
        deployment.decode_configs()?;
    }

    Ok(Inputs {
        agents,
        team,
        deployment,
    })
}
