//! Agent definitions.
//!
//! An agent is identified by its `name`; teams, workflow steps and other
//! agents refer to it only by that name. Optional fields are kept as
//! `Option` so a field that was never set stays absent on the wire, while a
//! field set to an empty list is written as `[]`.

mod document;


use crate::document::Document;
use crate::vocabulary::{Model, Tool};
use serde::{Deserialize, Serialize};

pub use document::{AgentDocument, load_agents_dir};

/// Kind of check a task describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    /// Run `command` and inspect its result.
    Command,
    /// Search for `pattern`.
    Pattern,
    /// Inspect `file` or `files`.
    File,
    /// Performed by hand; carries no machine-readable target.
    #[default]
    Manual,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Command => "command",
            TaskType::Pattern => "pattern",
            TaskType::File => "file",
            TaskType::Manual => "manual",
        }
    }
}

/// A unit of work an agent performs.
///
/// Which of `command`/`pattern`/`file`/`files` is meaningful depends on
/// `task_type`; the struct does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier, unique within the owning agent.
    pub id: String,

    pub description: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Tri-state: unset, required, or explicitly optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,

    /// When a human has to step in, as free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_in_loop: Option<String>,
}

impl Task {
    /// Create a task with only its identity and description set.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            task_type: None,
            command: None,
            pattern: None,
            file: None,
            files: None,
            required: None,
            expected_output: None,
            human_in_loop: None,
        }
    }

    /// Task type, falling back to [`TaskType::Manual`] when unset.
    pub fn effective_type(&self) -> TaskType {
        self.task_type.unwrap_or_default()
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.task_type = Some(TaskType::Command);
        self.command = Some(command.into());
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.task_type = Some(TaskType::Pattern);
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.task_type = Some(TaskType::File);
        self.file = Some(file.into());
        self
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.task_type = Some(TaskType::File);
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_type(mut self, task_type: TaskType) -> Self {
        self.task_type = Some(task_type);
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_expected_output(mut self, expected: impl Into<String>) -> Self {
        self.expected_output = Some(expected.into());
        self
    }

    pub fn with_human_in_loop(mut self, note: impl Into<String>) -> Self {
        self.human_in_loop = Some(note.into());
        self
    }
}

/// Agent definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier (lowercase, hyphenated, starting with a letter).
    pub name: String,

    /// Brief summary of what the agent does.
    pub description: String,

    /// Capability tier; [`Agent::effective_model`] applies the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,

    /// Tool names in declaration order. Duplicates are kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,

    /// Names of other agents this agent depends on or can spawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,

    /// External tools that must be installed for this agent to work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<Vec<String>>,

    /// System prompt. Treated as opaque text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
}

impl Agent {
    /// Create an agent with the default model and nothing else set.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            model: Some(Model::default()),
            tools: None,
            skills: None,
            dependencies: None,
            requires: None,
            instructions: None,
            tasks: None,
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    /// Set the tool list. Calling with no tools yields a present, empty list.
    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = Some(tools.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = Some(skills.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = Some(dependencies.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = Some(requires.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Append a task, creating the task list if needed.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.get_or_insert_with(Vec::new).push(task);
        self
    }

    /// Model tier, falling back to the default when unset.
    pub fn effective_model(&self) -> Model {
        self.model.unwrap_or_default()
    }

    pub fn tools(&self) -> &[String] {
        self.tools.as_deref().unwrap_or_default()
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or_default()
    }

    pub fn dependencies(&self) -> &[String] {
        self.dependencies.as_deref().unwrap_or_default()
    }

    pub fn requires(&self) -> &[String] {
        self.requires.as_deref().unwrap_or_default()
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.as_deref().unwrap_or_default()
    }

    /// Tool entries that are not canonical [`Tool`] names.
    pub fn non_canonical_tools(&self) -> impl Iterator<Item = &str> {
        self.tools()
            .iter()
            .map(String::as_str)
            .filter(|t| Tool::from_str(t).is_none())
    }
}

impl Document for Agent {
    const KIND: &'static str = "agent";
}
