//! JSON/YAML codec shared by every top-level document.
//!
//! Decoding never fills in values that were absent on the wire, so
//! `encode(decode(x))` reproduces `x` for documents written by this crate.

use crate::error::{Result, SpecError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

/// Serialization format, chosen from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format for `path`: `.json` or `.yaml`/`.yml`.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(SpecError::UserError(format!(
                "unsupported document extension for '{}' (expected .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}

/// A structured document that can be decoded from and encoded to the wire.
pub trait Document: Serialize + DeserializeOwned {
    /// Human-readable kind used in error messages (e.g. "team").
    const KIND: &'static str;

    /// Decode from a JSON string.
    fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SpecError::shape(Self::KIND, e))
    }

    /// Decode from a YAML string.
    fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| SpecError::shape(Self::KIND, e))
    }

    /// Decode from an already-parsed structured value.
    fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| SpecError::shape(Self::KIND, e))
    }

    /// Encode as compact JSON.
    fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| encode_error(Self::KIND, e))
    }

    /// Encode as indented JSON.
    fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| encode_error(Self::KIND, e))
    }

    /// Encode as YAML.
    fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| encode_error(Self::KIND, e))
    }

    /// Encode as a structured value.
    fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| encode_error(Self::KIND, e))
    }

    /// Load a document from disk, choosing the format by extension.
    fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;

        let content = std::fs::read_to_string(path).map_err(|e| {
            SpecError::UserError(format!(
                "failed to read {} file '{}': {}",
                Self::KIND,
                path.display(),
                e
            ))
        })?;

        tracing::debug!(kind = Self::KIND, path = %path.display(), "loading document");
        match format {
            DocumentFormat::Json => Self::from_json(&content),
            DocumentFormat::Yaml => Self::from_yaml(&content),
        }
    }
}

fn encode_error(kind: &str, err: impl std::fmt::Display) -> SpecError {
    SpecError::ShapeError(format!("failed to encode {}: {}", kind, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::Team;
    use std::io::Write;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("team.json")).unwrap(),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("deploy.yml")).unwrap(),
            DocumentFormat::Yaml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("deploy.yaml")).unwrap(),
            DocumentFormat::Yaml
        );
        assert!(DocumentFormat::from_path(Path::new("team.toml")).is_err());
    }

    #[test]
    fn load_yaml_document_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("team.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "name: research-team\nversion: 1.0.0\nagents: [lead]").unwrap();

        let team = Team::load(&path).unwrap();
        assert_eq!(team.name, "research-team");
        assert_eq!(team.agents, vec!["lead"]);
    }

    #[test]
    fn load_missing_file_is_user_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Team::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SpecError::UserError(_)));
    }

    #[test]
    fn malformed_payload_is_shape_error() {
        let err = Team::from_json(r#"{"name": 42}"#).unwrap_err();
        assert!(matches!(err, SpecError::ShapeError(_)));
        assert!(err.to_string().contains("team"));
    }
}
