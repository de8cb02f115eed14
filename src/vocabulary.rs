//! Canonical vocabulary shared by every platform.
//!
//! `Model` is a capability tier, not a concrete model identifier, and `Tool`
//! is a platform-neutral capability name. Both are translated to native
//! identifiers by [`crate::mappings`] only when artifacts are generated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Model capability tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    Haiku,
    /// Default tier for agents that do not name one.
    #[default]
    Sonnet,
    Opus,
}

impl Model {
    /// Every canonical model, in tier order.
    pub const ALL: [Model; 3] = [Model::Haiku, Model::Sonnet, Model::Opus];

    /// Canonical wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Haiku => "haiku",
            Model::Sonnet => "sonnet",
            Model::Opus => "opus",
        }
    }

    /// Parse a model from its canonical string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Model {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Canonical tool names available to agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    WebSearch,
    WebFetch,
    Read,
    Write,
    Glob,
    Grep,
    Bash,
    Edit,
    Task,
}

impl Tool {
    /// Every canonical tool.
    pub const ALL: [Tool; 9] = [
        Tool::WebSearch,
        Tool::WebFetch,
        Tool::Read,
        Tool::Write,
        Tool::Glob,
        Tool::Grep,
        Tool::Bash,
        Tool::Edit,
        Tool::Task,
    ];

    /// Canonical wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::WebSearch => "WebSearch",
            Tool::WebFetch => "WebFetch",
            Tool::Read => "Read",
            Tool::Write => "Write",
            Tool::Glob => "Glob",
            Tool::Grep => "Grep",
            Tool::Bash => "Bash",
            Tool::Edit => "Edit",
            Tool::Task => "Task",
        }
    }

    /// Parse a tool from its canonical string. Matching is case-sensitive.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Tool {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
