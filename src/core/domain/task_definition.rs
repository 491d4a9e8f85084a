//! Task-definition document.
//!
//! The ECS task-definition shape, used here as a manifest of secrets and
//! environment entries. Only the first container definition is meaningful;
//! fields this tool does not model are kept in `extra` so a document can be
//! read, enriched and written back without losing them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

use super::ParameterType;
use crate::error::{Error, Result, TemplateError};

/// Top-level task-definition document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    #[serde(default)]
    pub container_definitions: Vec<ContainerDefinition>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One container's environment and secrets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerDefinition {
    #[serde(default)]
    pub environment: Vec<EnvironmentEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Vec<Secret>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Plaintext environment variable. Never classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentEntry {
    pub name: String,
    pub value: String,
}

/// Secret reference, optionally carrying the value and type to store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    /// Environment variable name inside the container.
    #[serde(default)]
    pub name: String,
    /// Full parameter ARN or bare parameter path.
    #[serde(default)]
    pub value_from: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ParameterType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Secret {
    pub fn new(
        name: impl Into<String>,
        value_from: impl Into<String>,
        kind: ParameterType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value_from: value_from.into(),
            kind: Some(kind),
            value: Some(value.into()),
            extra: Map::new(),
        }
    }
}

impl TaskDefinition {
    /// A document with a single container holding `secrets` and no
    /// environment entries.
    pub fn with_secrets(secrets: Vec<Secret>) -> Self {
        Self {
            container_definitions: vec![ContainerDefinition {
                environment: Vec::new(),
                secrets: Some(secrets),
                extra: Map::new(),
            }],
            extra: Map::new(),
        }
    }

    /// Parse a document from JSON text. `path` is only used for messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| {
            TemplateError::Parse {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    /// Read and parse a document from disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::ReadFile` if the file cannot be read, or
    /// `TemplateError::Parse` if it is not a valid document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading task definition");
        let text = std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| TemplateError::Serialize(e).into())
    }

    /// Write the document as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "writing task definition");
        crate::core::fs::write_private(path, &self.to_json()?)
    }

    /// Drop every container after the first.
    pub fn truncate_to_first_container(&mut self) {
        self.container_definitions.truncate(1);
    }

    /// Secrets of the first container definition.
    ///
    /// # Errors
    ///
    /// `TemplateError::NoContainerDefinitions` if the list is empty,
    /// `TemplateError::NoSecrets` if the first container has no `secrets`.
    pub fn first_secrets(&self) -> Result<&[Secret]> {
        let container = self
            .container_definitions
            .first()
            .ok_or(TemplateError::NoContainerDefinitions)?;
        let secrets = container.secrets.as_ref().ok_or(TemplateError::NoSecrets)?;
        Ok(secrets)
    }

    /// Mutable variant of [`TaskDefinition::first_secrets`].
    pub fn first_secrets_mut(&mut self) -> Result<&mut Vec<Secret>> {
        let container = self
            .container_definitions
            .first_mut()
            .ok_or(TemplateError::NoContainerDefinitions)?;
        let secrets = container.secrets.as_mut().ok_or(TemplateError::NoSecrets)?;
        Ok(secrets)
    }
}
