//! Multi-agent system definitions.
//!
//! A platform-neutral model of agents, teams and deployments, plus:
//! - a registry mapping canonical model and tool names to platform identifiers
//! - per-platform target configuration decoded on demand
//! - a validator that collects every invariant violation in one pass
//!
//! Documents are JSON or YAML; agents are markdown files with YAML front
//! matter.

pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod deployment;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod mappings;
pub mod team;
pub mod validate;
pub mod vocabulary;

pub use agent::{Agent, AgentDocument, Task, TaskType};
pub use deployment::{Deployment, Platform, PlatformConfig, Priority, Target};
pub use document::Document;
pub use error::{Result, SpecError};
pub use team::{Port, PortType, Step, Team, Workflow, WorkflowType};
pub use validate::{ValidationReport, Violation, ViolationKind, validate_bundle};
pub use vocabulary::{Model, Tool};
