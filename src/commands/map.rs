//! Implementation of the `map-model` and `map-tool` commands.

use super::parse_platform;
use crate::cli::MapArgs;
use crate::error::Result;
use crate::mappings::{map_model, map_tool};
use crate::vocabulary::{Model, Tool};

pub fn cmd_map_model(args: MapArgs) -> Result<()> {
    println!("{}", map_model_output(&args)?);
    Ok(())
}

pub fn cmd_map_tool(args: MapArgs) -> Result<()> {
    println!("{}", map_tool_output(&args)?);
    Ok(())
}

/// The mapped model identifier. Only the platform can be rejected.
pub fn map_model_output(args: &MapArgs) -> Result<String> {
    let platform = parse_platform(&args.platform)?;
    if Model::from_str(&args.value).is_none() {
        tracing::warn!(value = %args.value, "not a canonical model tier");
    }
    Ok(map_model(platform, &args.value))
}

/// The mapped tool identifier. Only the platform can be rejected.
pub fn map_tool_output(args: &MapArgs) -> Result<String> {
    let platform = parse_platform(&args.platform)?;
    if Tool::from_str(&args.value).is_none() {
        tracing::warn!(value = %args.value, "not a canonical tool name");
    }
    Ok(map_tool(platform, &args.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpecError;

    fn args(platform: &str, value: &str) -> MapArgs {
        MapArgs {
            platform: platform.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_map_model_output() {
        assert_eq!(
            map_model_output(&args("kiro-cli", "opus")).unwrap(),
            "claude-opus-4"
        );
        assert_eq!(
            map_model_output(&args("aws-agentcore", "unknown")).unwrap(),
            "unknown"
        );
    }

    #[test]
    fn test_map_tool_output() {
        assert_eq!(
            map_tool_output(&args("agentkit-local", "WebFetch")).unwrap(),
            "shell"
        );
        assert_eq!(map_tool_output(&args("claude-code", "Read")).unwrap(), "Read");
    }

    #[test]
    fn test_unknown_platform_is_user_error() {
        let err = map_tool_output(&args("lambda", "Read")).unwrap_err();
        assert!(matches!(err, SpecError::UserError(_)));
    }
}
