//! Structural and cross-entity validation.
//!
//! Checks never stop at the first problem. Every violation is collected
//! into a [`ValidationReport`] so callers get complete diagnostics in one
//! pass. Checks are pure functions of their inputs.

mod bundle;
mod entities;
mod graph;
mod names;
mod types;


pub use bundle::validate_bundle;
pub use entities::{validate_agent, validate_deployment, validate_team};
pub use graph::find_cycles;
pub use names::{is_valid_name, is_valid_version};
pub use types::{ValidationReport, Violation, ViolationKind};
