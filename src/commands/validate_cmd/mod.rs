//! Implementation of the `validate` command.
//!
//! Loads whichever documents were named, decodes every target
//! configuration (a shape error aborts) and runs the validator over the
//! set. Violations exit with code 2.

mod load;
mod report;

#[cfg(test)]
mod tests;

use crate::cli::ValidateArgs;
use crate::config::ValidatorConfig;
use crate::error::{Result, SpecError};
use crate::validate::{ValidationReport, validate_bundle};

pub use load::{Inputs, load_inputs};
pub use report::{render_json, render_summary};

pub fn cmd_validate(args: ValidateArgs, config: &ValidatorConfig) -> Result<()> {
    let inputs = load_inputs(&args, config)?;
    let report = run_checks(&inputs, config);

    if args.json {
        println!("{}", render_json(&report)?);
        if report.passed() {
            return Ok(());
        }
        let headline = report.format_error();
        return Err(SpecError::ValidationError(
            headline.lines().next().unwrap_or_default().to_string(),
        ));
    }

    if report.passed() {
        println!("{}", render_summary(&inputs));
    }
    report.into_result()
}

/// Validate the loaded documents as one bundle.
pub fn run_checks(inputs: &Inputs, config: &ValidatorConfig) -> ValidationReport {
    validate_bundle(
        inputs.agents.as_deref(),
        inputs.team.as_ref(),
        inputs.deployment.as_ref(),
        config,
    )
}
