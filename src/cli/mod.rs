//! CLI argument parsing for masctl.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use crate::config::LOG_LEVELS;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// masctl: check and inspect multi-agent system definitions.
///
/// Agents are markdown files with YAML front matter. Teams and deployments
/// are JSON or YAML documents.
#[derive(Parser, Debug)]
#[command(name = "masctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log level used when MASCTL_LOG is unset. Overrides the config file.
    #[arg(long, global = true, value_parser = PossibleValuesParser::new(LOG_LEVELS))]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for masctl.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate agent, team and deployment definitions.
    ///
    /// Loads the given documents, decodes every target configuration and
    /// reports all invariant violations at once.
    Validate(ValidateArgs),

    /// Print the platform identifier for a canonical model tier.
    MapModel(MapArgs),

    /// Print the platform identifier for a canonical tool name.
    MapTool(MapArgs),

    /// List a deployment's targets in priority order.
    Targets(TargetsArgs),
}

impl Command {
    /// Config file named on the command line, if any.
    pub fn config_path(&self) -> Option<&Path> {
        match self {
            Command::Validate(args) => args.config.as_deref(),
            _ => None,
        }
    }
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Directory of agent markdown files.
    #[arg(long, value_name = "DIR")]
    pub agents: Option<PathBuf>,

    /// Team document (.json, .yaml or .yml).
    #[arg(long, value_name = "FILE")]
    pub team: Option<PathBuf>,

    /// Deployment document (.json, .yaml or .yml).
    #[arg(long, value_name = "FILE")]
    pub deployment: Option<PathBuf>,

    /// Validator config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `map-model` and `map-tool`.
#[derive(Parser, Debug)]
pub struct MapArgs {
    /// Target platform (e.g. kiro-cli, aws-agentcore).
    pub platform: String,

    /// Canonical identifier. Unknown values are printed unchanged.
    pub value: String,
}

/// Arguments for the `targets` command.
#[derive(Parser, Debug)]
pub struct TargetsArgs {
    /// Deployment document.
    pub deployment: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
