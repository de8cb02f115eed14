//! Markdown agent files: YAML front matter followed by the instructions.
//!
//! ```text
//! ---
//! name: researcher
//! description: Finds and summarizes sources
//! model: opus
//! tools: [WebSearch, Read]
//! ---
//!
//! You are a research assistant...
//! ```
//!
//! The body is kept byte-for-byte, including its line endings.

use super::Agent;
use crate::error::{Result, SpecError};
use globset::Glob;
use serde_yaml::Value;
use std::path::Path;

/// An agent parsed from a markdown file.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentDocument {
    /// The agent, with `instructions` taken from the markdown body.
    pub agent: Agent,
}

impl AgentDocument {
    /// Parse a markdown agent file.
    ///
    /// A non-blank body replaces any `instructions` key in the front matter.
    /// `tools` may be written as a YAML list or as a comma-separated string.
    pub fn parse(content: &str) -> Result<Self> {
        let (front_matter, body) = split_front_matter(content)?;

        let mut value: Value = serde_yaml::from_str(front_matter)
            .map_err(|e| SpecError::shape("agent front matter", e))?;
        normalize_tool_list(&mut value);

        let mut agent: Agent =
            serde_yaml::from_value(value).map_err(|e| SpecError::shape("agent front matter", e))?;

        if !body.trim().is_empty() {
            agent.instructions = Some(body.to_string());
        }

        Ok(Self { agent })
    }

    /// Load and parse a markdown agent file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SpecError::UserError(format!(
                "failed to read agent file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content).map_err(|e| match e {
            SpecError::ShapeError(msg) => {
                SpecError::ShapeError(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// Render back to markdown. Instructions become the body.
    pub fn to_markdown(&self) -> Result<String> {
        let mut front = self.agent.clone();
        let body = front.instructions.take().unwrap_or_default();

        let yaml = serde_yaml::to_string(&front).map_err(|e| {
            SpecError::ShapeError(format!("failed to encode agent front matter: {}", e))
        })?;

        let mut output = String::new();
        output.push_str("---\n");
        output.push_str(&yaml);
        output.push_str("---\n");
        output.push_str(&body);
        Ok(output)
    }

    pub fn into_agent(self) -> Agent {
        self.agent
    }
}

impl From<Agent> for AgentDocument {
    fn from(agent: Agent) -> Self {
        Self { agent }
    }
}

/// Load every agent file in `dir` whose file name matches `pattern`.
///
/// The scan is not recursive. Results are ordered by file name.
pub fn load_agents_dir<P: AsRef<Path>>(dir: P, pattern: &str) -> Result<Vec<Agent>> {
    let dir = dir.as_ref();
    let matcher = Glob::new(pattern)
        .map_err(|e| SpecError::UserError(format!("invalid agent file pattern '{}': {}", pattern, e)))?
        .compile_matcher();

    let entries = std::fs::read_dir(dir).map_err(|e| {
        SpecError::UserError(format!(
            "failed to read agents directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| SpecError::UserError(format!("failed to read directory entry: {}", e)))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name()
            && matcher.is_match(name)
        {
            paths.push(path);
        }
    }
    paths.sort();

    let mut agents = Vec::with_capacity(paths.len());
    for path in &paths {
        let agent = AgentDocument::load(path)?.into_agent();
        tracing::debug!(agent = %agent.name, path = %path.display(), "loaded agent");
        agents.push(agent);
    }
    Ok(agents)
}

/// Split `content` into (front matter YAML, body).
///
/// The first line must be `---`; the front matter ends at the next line that
/// is exactly `---`. The newline after the closing delimiter is not part of
/// the body.
fn split_front_matter(content: &str) -> Result<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');

    let first = lines
        .next()
        .ok_or_else(|| SpecError::ShapeError("agent file is empty".to_string()))?;
    if first.trim_end() != "---" {
        return Err(SpecError::ShapeError(
            "agent file must start with '---' front matter delimiter".to_string(),
        ));
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == "---" {
            let body_start = offset + line.len();
            return Ok((&content[yaml_start..offset], &content[body_start..]));
        }
        offset += line.len();
    }

    Err(SpecError::ShapeError(
        "agent file missing closing '---' front matter delimiter".to_string(),
    ))
}

/// Turn `tools: Read, Write` into `tools: [Read, Write]`.
fn normalize_tool_list(value: &mut Value) {
    let Some(map) = value.as_mapping_mut() else {
        return;
    };
    let tools: Vec<Value> = match map.get("tools") {
        Some(Value::String(list)) => list
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| Value::String(t.to_string()))
            .collect(),
        _ => return,
    };
    map.insert(Value::String("tools".to_string()), Value::Sequence(tools));
}
