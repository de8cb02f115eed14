//! Typed configuration shapes for each platform.
//!
//! `Target.config` stays an uninterpreted payload so fields this crate does
//! not model survive a round trip. These types are views decoded from that
//! payload according to `Target.platform`. Missing keys take the defaults
//! below.

use super::Platform;
use crate::document::Document;
use crate::error::{Result, SpecError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A configuration type bound to the platforms that accept it.
pub trait PlatformSettings: Document {
    /// Platforms whose targets decode into this type.
    const PLATFORMS: &'static [Platform];
    /// Name used in messages.
    const LABEL: &'static str;
}

// Default value functions for serde
fn default_agent_dir() -> String {
    ".claude/agents".to_string()
}
fn default_markdown() -> String {
    "markdown".to_string()
}
fn default_plugin_dir() -> String {
    "plugins/kiro/agents".to_string()
}
fn default_json() -> String {
    "json".to_string()
}
fn default_region() -> String {
    "us-east-1".to_string()
}
fn default_foundation_model() -> String {
    "anthropic.claude-3-sonnet-20240229-v1:0".to_string()
}
fn default_lambda_runtime() -> String {
    "python3.11".to_string()
}
fn default_namespace() -> String {
    "multi-agent".to_string()
}
fn default_true() -> bool {
    true
}
fn default_cpu() -> String {
    "500m".to_string()
}
fn default_memory() -> String {
    "512Mi".to_string()
}

/// File-based agent directory (Claude Code).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaudeCodeConfig {
    #[serde(default = "default_agent_dir")]
    pub agent_dir: String,
    #[serde(default = "default_markdown")]
    pub format: String,
}

impl Default for ClaudeCodeConfig {
    fn default() -> Self {
        Self {
            agent_dir: default_agent_dir(),
            format: default_markdown(),
        }
    }
}

/// Plugin directory (Kiro CLI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KiroCliConfig {
    #[serde(default = "default_plugin_dir")]
    pub plugin_dir: String,
    #[serde(default = "default_json")]
    pub format: String,
}

impl Default for KiroCliConfig {
    fn default() -> Self {
        Self {
            plugin_dir: default_plugin_dir(),
            format: default_json(),
        }
    }
}

/// Infrastructure-as-code tool used to provision managed agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IacTool {
    #[default]
    Cdk,
    Pulumi,
    Terraform,
}

/// Managed model service (AWS Bedrock AgentCore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsAgentCoreConfig {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_foundation_model")]
    pub foundation_model: String,
    #[serde(default)]
    pub iac: IacTool,
    #[serde(default = "default_lambda_runtime")]
    pub lambda_runtime: String,
}

impl Default for AwsAgentCoreConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            foundation_model: default_foundation_model(),
            iac: IacTool::default(),
            lambda_runtime: default_lambda_runtime(),
        }
    }
}

/// Container resource limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLimits {
    #[serde(default = "default_cpu")]
    pub cpu: String,
    #[serde(default = "default_memory")]
    pub memory: String,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            cpu: default_cpu(),
            memory: default_memory(),
        }
    }
}

/// Container orchestration (EKS, AKS, GKE or plain Kubernetes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_true")]
    pub helm_chart: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_registry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_limits: Option<ResourceLimits>,
}

impl Default for KubernetesConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            helm_chart: true,
            image_registry: None,
            resource_limits: None,
        }
    }
}

/// Transport used by a local agent runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Stdio,
    Http,
}

/// Local transport (AgentKit).
///
/// A port of 0 is treated as unset: it decodes to `None` and is never
/// written. Port 0 therefore cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AgentKitLocalConfig {
    #[serde(default)]
    pub transport: Transport,
    #[serde(
        default,
        deserialize_with = "deserialize_port",
        skip_serializing_if = "port_unset"
    )]
    pub port: Option<u16>,
}

fn deserialize_port<'de, D>(deserializer: D) -> std::result::Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let port = Option::<u16>::deserialize(deserializer)?;
    Ok(port.filter(|p| *p != 0))
}

fn port_unset(port: &Option<u16>) -> bool {
    matches!(port, None | Some(0))
}

macro_rules! platform_settings {
    ($ty:ty, $kind:literal, [$($platform:expr),+]) => {
        impl Document for $ty {
            const KIND: &'static str = $kind;
        }

        impl PlatformSettings for $ty {
            const PLATFORMS: &'static [Platform] = &[$($platform),+];
            const LABEL: &'static str = $kind;
        }
    };
}

platform_settings!(ClaudeCodeConfig, "claude-code config", [Platform::ClaudeCode]);
platform_settings!(KiroCliConfig, "kiro-cli config", [Platform::KiroCli]);
platform_settings!(AwsAgentCoreConfig, "aws-agentcore config", [Platform::AwsAgentCore]);
platform_settings!(
    KubernetesConfig,
    "kubernetes config",
    [
        Platform::AwsEks,
        Platform::AzureAks,
        Platform::GcpGke,
        Platform::Kubernetes
    ]
);
platform_settings!(AgentKitLocalConfig, "agentkit-local config", [Platform::AgentKitLocal]);

/// A target configuration decoded according to its platform.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformConfig {
    ClaudeCode(ClaudeCodeConfig),
    KiroCli(KiroCliConfig),
    AwsAgentCore(AwsAgentCoreConfig),
    Kubernetes(KubernetesConfig),
    AgentKitLocal(AgentKitLocalConfig),
    /// Payload for a platform without a modelled shape, kept as-is.
    Other(Value),
}

impl PlatformConfig {
    /// Decode `value` into the shape `platform` expects.
    pub fn decode(platform: Platform, value: Value) -> Result<Self> {
        tracing::trace!(%platform, "decoding target config");
        let config = match platform {
            Platform::ClaudeCode => Self::ClaudeCode(ClaudeCodeConfig::from_value(value)?),
            Platform::KiroCli => Self::KiroCli(KiroCliConfig::from_value(value)?),
            Platform::AwsAgentCore => Self::AwsAgentCore(AwsAgentCoreConfig::from_value(value)?),
            Platform::AwsEks | Platform::AzureAks | Platform::GcpGke | Platform::Kubernetes => {
                Self::Kubernetes(KubernetesConfig::from_value(value)?)
            }
            Platform::AgentKitLocal => {
                Self::AgentKitLocal(AgentKitLocalConfig::from_value(value)?)
            }
            Platform::DockerCompose => {
                if !value.is_object() {
                    return Err(SpecError::ShapeError(format!(
                        "failed to decode {} config: expected an object",
                        platform
                    )));
                }
                Self::Other(value)
            }
        };
        Ok(config)
    }

    /// Encode back into an uninterpreted payload.
    pub fn encode(&self) -> Result<Value> {
        match self {
            Self::ClaudeCode(c) => c.to_value(),
            Self::KiroCli(c) => c.to_value(),
            Self::AwsAgentCore(c) => c.to_value(),
            Self::Kubernetes(c) => c.to_value(),
            Self::AgentKitLocal(c) => c.to_value(),
            Self::Other(v) => Ok(v.clone()),
        }
    }

    /// The default configuration for `platform`, if it has a modelled shape.
    pub fn default_for(platform: Platform) -> Option<Self> {
        match platform {
            Platform::ClaudeCode => Some(Self::ClaudeCode(ClaudeCodeConfig::default())),
            Platform::KiroCli => Some(Self::KiroCli(KiroCliConfig::default())),
            Platform::AwsAgentCore => Some(Self::AwsAgentCore(AwsAgentCoreConfig::default())),
            Platform::AwsEks | Platform::AzureAks | Platform::GcpGke | Platform::Kubernetes => {
                Some(Self::Kubernetes(KubernetesConfig::default()))
            }
            Platform::AgentKitLocal => Some(Self::AgentKitLocal(AgentKitLocalConfig::default())),
            Platform::DockerCompose => None,
        }
    }

    /// Whether a target on `platform` may carry this configuration.
    pub fn applies_to(&self, platform: Platform) -> bool {
        match self {
            Self::ClaudeCode(_) => ClaudeCodeConfig::PLATFORMS.contains(&platform),
            Self::KiroCli(_) => KiroCliConfig::PLATFORMS.contains(&platform),
            Self::AwsAgentCore(_) => AwsAgentCoreConfig::PLATFORMS.contains(&platform),
            Self::Kubernetes(_) => KubernetesConfig::PLATFORMS.contains(&platform),
            Self::AgentKitLocal(_) => AgentKitLocalConfig::PLATFORMS.contains(&platform),
            Self::Other(_) => Self::default_for(platform).is_none(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ClaudeCode(_) => ClaudeCodeConfig::LABEL,
            Self::KiroCli(_) => KiroCliConfig::LABEL,
            Self::AwsAgentCore(_) => AwsAgentCoreConfig::LABEL,
            Self::Kubernetes(_) => KubernetesConfig::LABEL,
            Self::AgentKitLocal(_) => AgentKitLocalConfig::LABEL,
            Self::Other(_) => "unmodelled config",
        }
    }
}

impl From<ClaudeCodeConfig> for PlatformConfig {
    fn from(c: ClaudeCodeConfig) -> Self {
        Self::ClaudeCode(c)
    }
}

impl From<KiroCliConfig> for PlatformConfig {
    fn from(c: KiroCliConfig) -> Self {
        Self::KiroCli(c)
    }
}

impl From<AwsAgentCoreConfig> for PlatformConfig {
    fn from(c: AwsAgentCoreConfig) -> Self {
        Self::AwsAgentCore(c)
    }
}

impl From<KubernetesConfig> for PlatformConfig {
    fn from(c: KubernetesConfig) -> Self {
        Self::Kubernetes(c)
    }
}

impl From<AgentKitLocalConfig> for PlatformConfig {
    fn from(c: AgentKitLocalConfig) -> Self {
        Self::AgentKitLocal(c)
    }
}
