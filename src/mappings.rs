//! Canonical → platform identifier mapping.
//!
//! Each (platform, concept) pair owns one static table. Lookups are total
//! over strings: a value with no entry, including one outside the canonical
//! vocabulary, is returned unchanged. Mapping never fails.
//!
//! The tables are immutable statics and may be read from any thread.

use crate::agent::Agent;
use crate::deployment::Platform;
use crate::vocabulary::{Model, Tool};

/// A closed canonical vocabulary usable as a mapping key.
pub trait Canonical: Copy + 'static {
    fn canonical(&self) -> &'static str;
}

impl Canonical for Model {
    fn canonical(&self) -> &'static str {
        self.as_str()
    }
}

impl Canonical for Tool {
    fn canonical(&self) -> &'static str {
        self.as_str()
    }
}

/// Lookup table from canonical identifiers to one platform's identifiers.
#[derive(Debug)]
pub struct MappingTable<K: 'static> {
    pub platform: Platform,
    entries: &'static [(K, &'static str)],
}

impl<K: Canonical> MappingTable<K> {
    /// Native identifier for `canonical`, if the table has an entry.
    pub fn get(&self, canonical: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| key.canonical() == canonical)
            .map(|(_, native)| *native)
    }

    /// Whether the table has an entry for `key`.
    pub fn covers(&self, key: K) -> bool {
        self.get(key.canonical()).is_some()
    }

    pub fn entries(&self) -> &'static [(K, &'static str)] {
        self.entries
    }
}

/// Claude Code uses the tier names directly.
pub static CLAUDE_CODE_MODELS: MappingTable<Model> = MappingTable {
    platform: Platform::ClaudeCode,
    entries: &[
        (Model::Haiku, "haiku"),
        (Model::Sonnet, "sonnet"),
        (Model::Opus, "opus"),
    ],
};

pub static KIRO_CLI_MODELS: MappingTable<Model> = MappingTable {
    platform: Platform::KiroCli,
    entries: &[
        (Model::Haiku, "claude-haiku-35"),
        (Model::Sonnet, "claude-sonnet-4"),
        (Model::Opus, "claude-opus-4"),
    ],
};

/// AWS Bedrock model identifiers, used by AgentCore targets.
pub static BEDROCK_MODELS: MappingTable<Model> = MappingTable {
    platform: Platform::AwsAgentCore,
    entries: &[
        (Model::Haiku, "anthropic.claude-3-haiku-20240307-v1:0"),
        (Model::Sonnet, "anthropic.claude-3-5-sonnet-20241022-v2:0"),
        (Model::Opus, "anthropic.claude-3-opus-20240229-v1:0"),
    ],
};

pub static KIRO_CLI_TOOLS: MappingTable<Tool> = MappingTable {
    platform: Platform::KiroCli,
    entries: &[
        (Tool::WebSearch, "web_search"),
        (Tool::WebFetch, "web_fetch"),
        (Tool::Read, "read"),
        (Tool::Write, "write"),
        (Tool::Glob, "glob"),
        (Tool::Grep, "grep"),
        (Tool::Bash, "bash"),
        (Tool::Edit, "edit"),
        (Tool::Task, "task"),
    ],
};

/// AgentKit has no web or sub-agent tools; those go through the shell.
pub static AGENTKIT_TOOLS: MappingTable<Tool> = MappingTable {
    platform: Platform::AgentKitLocal,
    entries: &[
        (Tool::WebSearch, "shell"),
        (Tool::WebFetch, "shell"),
        (Tool::Read, "read"),
        (Tool::Write, "write"),
        (Tool::Glob, "glob"),
        (Tool::Grep, "grep"),
        (Tool::Bash, "shell"),
        (Tool::Edit, "write"),
        (Tool::Task, "shell"),
    ],
};

/// Every model table in the registry.
pub static MODEL_TABLES: [&MappingTable<Model>; 3] =
    [&CLAUDE_CODE_MODELS, &KIRO_CLI_MODELS, &BEDROCK_MODELS];

/// Every tool table in the registry.
pub static TOOL_TABLES: [&MappingTable<Tool>; 2] = [&KIRO_CLI_TOOLS, &AGENTKIT_TOOLS];

/// The model table for `platform`, if it has one.
pub fn model_table(platform: Platform) -> Option<&'static MappingTable<Model>> {
    MODEL_TABLES.iter().copied().find(|t| t.platform == platform)
}

/// The tool table for `platform`, if it has one.
pub fn tool_table(platform: Platform) -> Option<&'static MappingTable<Tool>> {
    TOOL_TABLES.iter().copied().find(|t| t.platform == platform)
}

fn lookup<K: Canonical>(table: Option<&MappingTable<K>>, canonical: &str) -> String {
    match table.and_then(|t| t.get(canonical)) {
        Some(native) => native.to_string(),
        None => {
            tracing::trace!(canonical, "no platform mapping, passing through");
            canonical.to_string()
        }
    }
}

/// Map a model tier to `platform`'s identifier, passing unknown values through.
pub fn map_model(platform: Platform, model: impl AsRef<str>) -> String {
    lookup(model_table(platform), model.as_ref())
}

/// Map a tool name to `platform`'s identifier, passing unknown values through.
pub fn map_tool(platform: Platform, tool: impl AsRef<str>) -> String {
    lookup(tool_table(platform), tool.as_ref())
}

pub fn map_model_to_claude_code(model: impl AsRef<str>) -> String {
    lookup(Some(&CLAUDE_CODE_MODELS), model.as_ref())
}

pub fn map_model_to_kiro_cli(model: impl AsRef<str>) -> String {
    lookup(Some(&KIRO_CLI_MODELS), model.as_ref())
}

pub fn map_model_to_bedrock(model: impl AsRef<str>) -> String {
    lookup(Some(&BEDROCK_MODELS), model.as_ref())
}

pub fn map_tool_to_kiro_cli(tool: impl AsRef<str>) -> String {
    lookup(Some(&KIRO_CLI_TOOLS), tool.as_ref())
}

pub fn map_tool_to_agentkit(tool: impl AsRef<str>) -> String {
    lookup(Some(&AGENTKIT_TOOLS), tool.as_ref())
}

/// Platform identifiers for an agent's model and tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentifiers {
    pub model: String,
    /// Mapped tools in declaration order; distinct tools may map to the same name.
    pub tools: Vec<String>,
}

/// Resolve `agent`'s model (default applied) and tools for `platform`.
pub fn resolve_agent(platform: Platform, agent: &Agent) -> ResolvedIdentifiers {
    ResolvedIdentifiers {
        model: map_model(platform, agent.effective_model()),
        tools: agent.tools().iter().map(|t| map_tool(platform, t)).collect(),
    }
}
