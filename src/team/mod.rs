//! Team and workflow definitions.
//!
//! A team lists its agents by name and may describe how they cooperate as a
//! workflow of steps. Steps refer to agents and to each other by name only;
//! the validator checks that those names resolve.


use crate::document::Document;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Workflow execution pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowType {
    Sequential,
    Parallel,
    /// Steps run as their `depends_on` edges allow; the graph must be acyclic.
    Dag,
    /// An orchestrator agent decides the order at runtime.
    #[default]
    Orchestrated,
}

impl WorkflowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowType::Sequential => "sequential",
            WorkflowType::Parallel => "parallel",
            WorkflowType::Dag => "dag",
            WorkflowType::Orchestrated => "orchestrated",
        }
    }
}

/// Data type carried by a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortType {
    String,
    Number,
    Boolean,
    Object,
    Array,
    File,
}

/// A typed input or output slot on a step.
///
/// `required`, `from` and `default` only apply to inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub name: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub port_type: Option<PortType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Source reference written as `step_name.output_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// JSON Schema for the port's data, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,

    /// Value used when the input is not provided, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// A parsed `step.port` reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRef<'a> {
    pub step: &'a str,
    pub port: &'a str,
}

impl<'a> PortRef<'a> {
    /// Parse `step.port`, splitting at the first dot that leaves both
    /// halves non-empty.
    ///
    /// Step names may themselves contain dots; use
    /// [`Workflow::resolve_source`] to split against the declared steps.
    pub fn parse(reference: &'a str) -> Option<Self> {
        Self::splits(reference).last()
    }

    /// Every way to split `reference` into non-empty `step` and `port`
    /// halves, longest step first.
    pub fn splits(reference: &'a str) -> impl Iterator<Item = PortRef<'a>> {
        reference.rmatch_indices('.').filter_map(move |(i, _)| {
            let (step, port) = (&reference[..i], &reference[i + 1..]);
            (!step.is_empty() && !port.is_empty()).then_some(PortRef { step, port })
        })
    }
}

impl Port {
    pub fn new(name: impl Into<String>, port_type: PortType) -> Self {
        Self {
            name: name.into(),
            port_type: Some(port_type),
            description: None,
            required: None,
            from: None,
            schema: None,
            default: None,
        }
    }

    /// Wire this input to `step.output`.
    pub fn from_output(mut self, step: &str, output: &str) -> Self {
        self.from = Some(format!("{}.{}", step, output));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// The parsed `from` reference, if present and well formed.
    ///
    /// Splits at the first dot; see [`Workflow::resolve_source`].
    pub fn source(&self) -> Option<PortRef<'_>> {
        self.from.as_deref().and_then(PortRef::parse)
    }
}

/// A workflow step definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Identifier, unique within the workflow.
    pub name: String,

    /// Name of the agent that executes this step.
    pub agent: String,

    /// Steps that must complete before this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<Port>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Port>>,
}

impl Step {
    pub fn new(name: impl Into<String>, agent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            agent: agent.into(),
            depends_on: None,
            inputs: None,
            outputs: None,
        }
    }

    pub fn with_depends_on<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on = Some(steps.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_input(mut self, port: Port) -> Self {
        self.inputs.get_or_insert_with(Vec::new).push(port);
        self
    }

    pub fn with_output(mut self, port: Port) -> Self {
        self.outputs.get_or_insert_with(Vec::new).push(port);
        self
    }

    pub fn depends_on(&self) -> &[String] {
        self.depends_on.as_deref().unwrap_or_default()
    }

    pub fn inputs(&self) -> &[Port] {
        self.inputs.as_deref().unwrap_or_default()
    }

    pub fn outputs(&self) -> &[Port] {
        self.outputs.as_deref().unwrap_or_default()
    }

    pub fn output(&self, name: &str) -> Option<&Port> {
        self.outputs().iter().find(|p| p.name == name)
    }
}

/// A workflow definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub workflow_type: Option<WorkflowType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

impl Workflow {
    pub fn new(workflow_type: WorkflowType) -> Self {
        Self {
            workflow_type: Some(workflow_type),
            steps: None,
        }
    }

    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.get_or_insert_with(Vec::new).push(step);
        self
    }

    /// Execution pattern, falling back to orchestrated when unset.
    pub fn effective_type(&self) -> WorkflowType {
        self.workflow_type.unwrap_or_default()
    }

    pub fn steps(&self) -> &[Step] {
        self.steps.as_deref().unwrap_or_default()
    }

    pub fn step(&self, name: &str) -> Option<&Step> {
        self.steps().iter().find(|s| s.name == name)
    }

    /// Resolve a `step.output` reference to the step it names.
    ///
    /// The longest prefix naming a declared step wins, so `fetch.v2.rows`
    /// resolves to step `fetch.v2` when it exists. The output is not checked.
    pub fn resolve_source<'a>(&'a self, reference: &'a str) -> Option<(&'a Step, PortRef<'a>)> {
        PortRef::splits(reference).find_map(|r| self.step(r.step).map(|s| (s, r)))
    }
}

/// Team definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Team identifier (e.g. `stats-agent-team`).
    pub name: String,

    /// Semantic version of the team definition.
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Names of the agents in the team.
    pub agents: Vec<String>,

    /// Name of the orchestrator agent; must be one of `agents`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orchestrator: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<Workflow>,

    /// Shared background given to every agent. Treated as opaque text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Team {
    /// Create a team with no agents.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: None,
            agents: Vec::new(),
            orchestrator: None,
            workflow: None,
            context: None,
        }
    }

    pub fn with_agents<I, S>(mut self, agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.agents = agents.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_orchestrator(mut self, orchestrator: impl Into<String>) -> Self {
        self.orchestrator = Some(orchestrator.into());
        self
    }

    pub fn with_workflow(mut self, workflow: Workflow) -> Self {
        self.workflow = Some(workflow);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn has_agent(&self, name: &str) -> bool {
        self.agents.iter().any(|a| a == name)
    }
}

impl Document for Team {
    const KIND: &'static str = "team";
}
