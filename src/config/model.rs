//! ValidatorConfig struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Settings for the validator and the `masctl` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Which workflows are checked for `depends_on` cycles.
    #[serde(default)]
    pub cycle_check: CycleCheck,

    /// Require each task to populate the field its type implies.
    #[serde(default)]
    pub check_task_fields: bool,

    /// Reject agent tools outside the canonical vocabulary.
    #[serde(default)]
    pub canonical_tools_only: bool,

    /// File-name glob used when loading an agents directory.
    #[serde(default = "default_agent_file_pattern")]
    pub agent_file_pattern: String,

    /// Log level used when `MASCTL_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            cycle_check: CycleCheck::default(),
            check_task_fields: false,
            canonical_tools_only: false,
            agent_file_pattern: default_agent_file_pattern(),
            log_level: default_log_level(),
        }
    }
}
