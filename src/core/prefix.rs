//! Export of every parameter under a path prefix.

use std::path::PathBuf;
use tracing::debug;

use crate::core::domain::{Secret, TaskDefinition};
use crate::core::env::to_env_string;
use crate::core::mapper::strip_prefix;
use crate::core::store::ParameterStore;
use crate::error::Result;

/// Parameters under a prefix, as `.env` pairs and a task definition.
#[derive(Debug)]
pub struct PrefixExport {
    /// `(short key, value)` in listing order
    pub entries: Vec<(String, String)>,
    /// One secret per parameter; `valueFrom` is the full path
    pub document: TaskDefinition,
}

/// List everything under `prefix` and map it to short keys.
///
/// # Errors
///
/// Any failed page aborts the export.
pub fn fetch_by_prefix(store: &dyn ParameterStore, prefix: &str) -> Result<PrefixExport> {
    let parameters = store.list_by_prefix(prefix)?;
    debug!(prefix, count = parameters.len(), "listed parameters");

    let mut entries = Vec::with_capacity(parameters.len());
    let mut secrets = Vec::with_capacity(parameters.len());

    for parameter in parameters {
        let key = strip_prefix(&parameter.name, prefix).to_string();
        entries.push((key.clone(), parameter.value.clone()));
        secrets.push(Secret::new(key, parameter.name, parameter.kind, parameter.value));
    }

    Ok(PrefixExport {
        entries,
        document: TaskDefinition::with_secrets(secrets),
    })
}

impl PrefixExport {
    /// Write `<base>.env` and `<base>.json`.
    pub fn save(&self, base: &str) -> Result<(PathBuf, PathBuf)> {
        let env_path = PathBuf::from(format!("{}.env", base));
        let json_path = PathBuf::from(format!("{}.json", base));

        crate::core::fs::write_private(&env_path, &to_env_string(&self.entries))?;
        self.document.save(&json_path)?;

        Ok((env_path, json_path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
