//! Validator configuration.
//!
//! Loaded from a YAML file. Unknown fields are ignored for forward
//! compatibility, every field has a default, and values are checked after
//! parsing.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::ValidatorConfig;
pub use types::{CycleCheck, LOG_LEVELS};
