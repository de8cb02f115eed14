//! Deployment definitions.
//!
//! A deployment materializes one team on one or more targets. Each target
//! names a platform and carries that platform's configuration as an opaque
//! structured payload; see [`platform_config`] for the typed shapes.

pub mod platform_config;


use crate::document::Document;
use crate::error::{Result, SpecError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub use platform_config::{
    AgentKitLocalConfig, AwsAgentCoreConfig, ClaudeCodeConfig, IacTool, KiroCliConfig,
    KubernetesConfig, PlatformConfig, PlatformSettings, ResourceLimits, Transport,
};

/// Supported deployment platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    ClaudeCode,
    KiroCli,
    #[serde(rename = "aws-agentcore")]
    AwsAgentCore,
    AwsEks,
    AzureAks,
    GcpGke,
    Kubernetes,
    DockerCompose,
    #[serde(rename = "agentkit-local")]
    AgentKitLocal,
}

impl Platform {
    pub const ALL: [Platform; 9] = [
        Platform::ClaudeCode,
        Platform::KiroCli,
        Platform::AwsAgentCore,
        Platform::AwsEks,
        Platform::AzureAks,
        Platform::GcpGke,
        Platform::Kubernetes,
        Platform::DockerCompose,
        Platform::AgentKitLocal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::ClaudeCode => "claude-code",
            Platform::KiroCli => "kiro-cli",
            Platform::AwsAgentCore => "aws-agentcore",
            Platform::AwsEks => "aws-eks",
            Platform::AzureAks => "azure-aks",
            Platform::GcpGke => "gcp-gke",
            Platform::Kubernetes => "kubernetes",
            Platform::DockerCompose => "docker-compose",
            Platform::AgentKitLocal => "agentkit-local",
        }
    }

    /// Parse a platform from its wire string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    /// Whether this platform runs on a Kubernetes cluster.
    pub fn is_kubernetes(&self) -> bool {
        matches!(
            self,
            Platform::AwsEks | Platform::AzureAks | Platform::GcpGke | Platform::Kubernetes
        )
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment priority levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    P1,
    #[default]
    P2,
    P3,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P1 => "p1",
            Priority::P2 => "p2",
            Priority::P3 => "p3",
        }
    }
}

/// One (platform, output, configuration) triple within a deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Unique name within the deployment.
    pub name: String,

    pub platform: Platform,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Directory for generated artifacts.
    pub output: String,

    /// Platform-specific configuration, decoded on demand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

impl Target {
    pub fn new(name: impl Into<String>, platform: Platform, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            platform,
            priority: None,
            output: output.into(),
            config: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Store a typed configuration as this target's payload.
    ///
    /// Fails if the configuration belongs to a different platform.
    pub fn with_config(mut self, config: PlatformConfig) -> Result<Self> {
        if !config.applies_to(self.platform) {
            return Err(SpecError::UserError(format!(
                "{} cannot be used for platform '{}'",
                config.label(),
                self.platform
            )));
        }
        self.config = Some(config.encode()?);
        Ok(self)
    }

    /// Priority, falling back to p2 when unset.
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }

    /// Decode the payload into the variant selected by `platform`.
    ///
    /// Returns `Ok(None)` when no payload is present.
    pub fn decode_config(&self) -> Result<Option<PlatformConfig>> {
        match &self.config {
            None => Ok(None),
            Some(value) => PlatformConfig::decode(self.platform, value.clone()).map(Some),
        }
    }

    /// Decode the payload as a specific configuration type.
    ///
    /// Errors if `T` does not belong to this target's platform.
    pub fn config_as<T: PlatformSettings>(&self) -> Result<Option<T>> {
        if !T::PLATFORMS.contains(&self.platform) {
            return Err(SpecError::UserError(format!(
                "target '{}' is a {} target, not {}",
                self.name,
                self.platform,
                T::LABEL
            )));
        }
        match &self.config {
            None => Ok(None),
            Some(value) => T::from_value(value.clone()).map(Some),
        }
    }
}

/// Deployment definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    /// JSON Schema reference.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Name of the team being deployed.
    pub team: String,

    pub targets: Vec<Target>,
}

impl Deployment {
    /// Create a deployment with no targets.
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            schema: None,
            team: team.into(),
            targets: Vec::new(),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn add_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }

    /// Targets ordered by effective priority; ties keep declaration order.
    pub fn targets_by_priority(&self) -> Vec<&Target> {
        let mut targets: Vec<&Target> = self.targets.iter().collect();
        targets.sort_by_key(|t| t.effective_priority());
        targets
    }

    /// Decode every target's configuration, stopping at the first shape error.
    pub fn decode_configs(&self) -> Result<Vec<(&Target, Option<PlatformConfig>)>> {
        self.targets
            .iter()
            .map(|t| {
                let config = t.decode_config().map_err(|e| match e {
                    SpecError::ShapeError(msg) => {
                        SpecError::ShapeError(format!("target '{}': {}", t.name, msg))
                    }
                    other => other,
                })?;
                Ok((t, config))
            })
            .collect()
    }
}

impl Document for Deployment {
    const KIND: &'static str = "deployment";
}
