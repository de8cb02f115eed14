//! Configuration enums and default value functions.

use serde::{Deserialize, Serialize};

/// Which workflows must have an acyclic `depends_on` graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CycleCheck {
    /// Every workflow, whatever its type.
    #[default]
    All,
    /// Only workflows of type `dag`.
    DagOnly,
}

impl CycleCheck {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "dag_only" => Some(Self::DagOnly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::DagOnly => "dag_only",
        }
    }
}

/// Accepted values for `log_level`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

pub fn default_agent_file_pattern() -> String {
    "*.md".to_string()
}

pub fn default_log_level() -> String {
    "warn".to_string()
}
