//! Task-definition generation from `.env` files.

use std::path::Path;
use tracing::debug;

use crate::core::classify::classify;
use crate::core::config::Config;
use crate::core::domain::{Secret, TaskDefinition};
use crate::core::env::{dedupe_last_wins, Env};
use crate::core::mapper::fallback_value_from;
use crate::error::Result;

/// Build a task definition whose first container holds one classified
/// secret per unique key (last value wins), referenced as `prefix + key`.
pub fn from_entries(entries: Vec<(String, String)>, prefix: &str) -> TaskDefinition {
    let secrets = dedupe_last_wins(entries)
        .into_iter()
        .map(|(key, value)| {
            let kind = classify(&key, &value);
            debug!(key = %key, kind = %kind, "classified");
            let value_from = fallback_value_from(prefix, &key);
            Secret::new(key, value_from, kind, value)
        })
        .collect();

    TaskDefinition::with_secrets(secrets)
}

/// Read `env_file`, generate the task definition and write it to `output`.
///
/// # Errors
///
/// Returns an error naming the file if the input cannot be read or the
/// output cannot be written.
pub fn generate(env_file: &Path, output: &Path, config: &Config) -> Result<TaskDefinition> {
    let env = Env::load(env_file)?;
    let document = from_entries(env.entries().to_vec(), &config.parameter_prefix);
    document.save(output)?;
    Ok(document)
}
