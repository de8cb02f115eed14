//! masctl: check and inspect multi-agent system definitions.
//!
//! Parses arguments, loads the validator config, installs logging and
//! dispatches to the command handler. Errors map to exit codes.

use multi_agent_spec::cli::Cli;
use multi_agent_spec::error::Result;
use multi_agent_spec::{commands, exit_codes, logging};
use std::process::ExitCode;

fn run(cli: Cli) -> Result<()> {
    let config = commands::load_config(cli.command.config_path())?;
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    logging::init_logging(level)?;

    commands::dispatch(cli.command, &config)
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
