//! Bulk operations driven by a task-definition template.
//!
//! - [`put_from_template`] stores every secret that carries a value.
//! - [`fetch_from_template`] resolves every secret reference and fills in
//!   its current value and type.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::domain::{Parameter, TaskDefinition};
use crate::core::env::to_env_string;
use crate::core::mapper::{fallback_value_from, resolve_value_from};
use crate::core::store::ParameterStore;
use crate::error::{Error, Result};

/// One item of a template push, in template order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutStep {
    /// Parameter to store
    Put(Parameter),
    /// Secret name skipped for lack of a value
    Skip(String),
}

/// What a template push would store.
#[derive(Debug, Default)]
pub struct PutPlan {
    pub steps: Vec<PutStep>,
}

impl PutPlan {
    /// Parameters to store, in template order.
    pub fn parameters(&self) -> Vec<&Parameter> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                PutStep::Put(parameter) => Some(parameter),
                PutStep::Skip(_) => None,
            })
            .collect()
    }

    /// Names of the skipped secrets, in template order.
    pub fn skipped(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                PutStep::Skip(name) => Some(name.as_str()),
                PutStep::Put(_) => None,
            })
            .collect()
    }
}

/// Decide which parameters a template stores and where.
///
/// Secrets without a value are skipped. A secret whose `valueFrom` is not
/// an SSM ARN or a bare path is stored under the configured prefix.
pub fn plan_puts(document: &TaskDefinition, config: &Config) -> Result<PutPlan> {
    let mut plan = PutPlan::default();

    for secret in document.first_secrets()? {
        let value = match secret.value.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => {
                plan.steps.push(PutStep::Skip(secret.name.clone()));
                continue;
            }
        };
        let path = resolve_value_from(&secret.value_from)
            .unwrap_or_else(|| fallback_value_from(&config.parameter_prefix, &secret.name));
        let kind = secret.kind.unwrap_or_default();

        plan.steps.push(PutStep::Put(Parameter::new(path, value, kind)));
    }

    Ok(plan)
}

/// Push every valued secret of `template` to the store.
///
/// `report` sees each step as soon as it is done: a skip right away, a put
/// once the store accepted it. Stops at the first failed put; the error
/// names the parameter and later steps are never reported.
pub fn put_from_template(
    store: &dyn ParameterStore,
    template: &Path,
    config: &Config,
    mut report: impl FnMut(&PutStep),
) -> Result<PutPlan> {
    let document = TaskDefinition::load(template)?;
    let plan = plan_puts(&document, config)?;

    for step in &plan.steps {
        if let PutStep::Put(parameter) = step {
            store.put(parameter)?;
            debug!(name = %parameter.name, kind = %parameter.kind, "stored");
        }
        report(step);
    }

    Ok(plan)
}

/// A secret that could not be resolved during a bulk fetch.
#[derive(Debug)]
pub enum Failure {
    /// `valueFrom` is neither an SSM parameter ARN nor a path
    InvalidReference { name: String, value_from: String },
    /// The store returned an error
    Fetch { name: String, error: Error },
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReference { name, value_from } => {
                write!(f, "Invalid ARN for {}: {}", name, value_from)
            }
            Self::Fetch { name, error } => write!(f, "Failed to get {}: {}", name, error),
        }
    }
}

/// Result of resolving a template's secrets.
#[derive(Debug)]
pub struct Fetched {
    /// `(name, value)` for each resolved secret, in template order
    pub values: Vec<(String, String)>,
    /// Template with values and types filled in, first container only
    pub document: TaskDefinition,
    pub failures: Vec<Failure>,
}

/// Resolve every secret in `document` against the store.
///
/// A bad reference or failed fetch is recorded and the loop moves on.
///
/// # Errors
///
/// Only structural problems with the document are errors.
pub fn fetch(store: &dyn ParameterStore, mut document: TaskDefinition) -> Result<Fetched> {
    document.truncate_to_first_container();

    let mut values = Vec::new();
    let mut failures = Vec::new();

    for secret in document.first_secrets_mut()? {
        let Some(path) = resolve_value_from(&secret.value_from) else {
            failures.push(Failure::InvalidReference {
                name: secret.name.clone(),
                value_from: secret.value_from.clone(),
            });
            continue;
        };

        match store.get(&path) {
            Ok(parameter) => {
                debug!(name = %secret.name, path = %path, "resolved");
                values.push((secret.name.clone(), parameter.value.clone()));
                secret.value = Some(parameter.value);
                secret.kind = Some(parameter.kind);
            }
            Err(error) => failures.push(Failure::Fetch {
                name: secret.name.clone(),
                error,
            }),
        }
    }

    Ok(Fetched {
        values,
        document,
        failures,
    })
}

/// Load `template` and resolve its secrets.
pub fn fetch_from_template(store: &dyn ParameterStore, template: &Path) -> Result<Fetched> {
    fetch(store, TaskDefinition::load(template)?)
}

/// `base` with a `-DDMMYY` suffix.
pub fn dated_base(base: &str, date: NaiveDate) -> String {
    format!("{}-{}", base, date.format(constants::DATE_SUFFIX_FORMAT))
}

impl Fetched {
    /// Write `<base>-DDMMYY.env` and `<base>-DDMMYY.json`.
    ///
    /// The `.env` holds one line per name, the last resolved value winning,
    /// sorted by name.
    pub fn save(&self, base: &str, date: NaiveDate) -> Result<(PathBuf, PathBuf)> {
        let base = dated_base(base, date);
        let env_path = PathBuf::from(format!("{}.env", base));
        let json_path = PathBuf::from(format!("{}.json", base));

        let unique: BTreeMap<&str, &str> = self
            .values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let entries: Vec<(&str, &str)> = unique.into_iter().collect();

        crate::core::fs::write_private(&env_path, &to_env_string(&entries))?;
        self.document.save(&json_path)?;

        Ok((env_path, json_path))
    }
}
