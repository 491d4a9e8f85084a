//! Template commands - bulk put and bulk get through a task definition.

use std::path::Path;

use crate::cli::{output, require};
use crate::core::config::Config;
use crate::core::store::{self, ParameterStore};
use crate::core::template::{self, Fetched, PutStep};
use crate::error::Result;

const SOURCE_REQUIRED: &str = "-s <filename.json> is required for 'put-from-template'";

/// Store every valued secret of the template at `source`.
pub fn put(source: Option<&Path>, region: &str, config: &Config) -> Result<()> {
    let source = require(source, SOURCE_REQUIRED)?;
    let store = store::connect(region)?;
    put_with(store.as_ref(), source, config)
}

/// Store the template's secrets in `store`, reporting each one as it lands.
pub fn put_with(store: &dyn ParameterStore, source: &Path, config: &Config) -> Result<()> {
    template::put_from_template(store, source, config, report_step)?;
    Ok(())
}

fn report_step(step: &PutStep) {
    match step {
        PutStep::Put(parameter) => output::success(&format!(
            "Put secret {} as {}",
            parameter.name, parameter.kind
        )),
        PutStep::Skip(name) => output::warn(&format!("Skipping {}: missing value", name)),
    }
}

/// Resolve every secret referenced by `source`.
///
/// Without `output_base` the values are printed; with it they are saved
/// to dated `.env` and `.json` files.
pub fn fetch(source: &Path, output_base: Option<&str>, region: &str) -> Result<()> {
    let store = store::connect(region)?;
    fetch_with(store.as_ref(), source, output_base)
}

/// Resolve the template's secrets against `store`.
pub fn fetch_with(store: &dyn ParameterStore, source: &Path, output_base: Option<&str>) -> Result<()> {
    let fetched = template::fetch_from_template(store, source)?;
    for failure in &fetched.failures {
        output::warn(&failure.to_string());
    }

    match output_base {
        Some(base) => save(&fetched, base),
        None => {
            for line in value_lines(&fetched.values) {
                output::raw(&line);
            }
            Ok(())
        }
    }
}

/// `NAME=value` for each resolved secret, in template order.
fn value_lines(values: &[(String, String)]) -> Vec<String> {
    values
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect()
}

fn save(fetched: &Fetched, base: &str) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let (env_path, json_path) = fetched.save(base, today)?;

    output::success(&format!("Saved bulk env to {}", output::path(env_path.display())));
    output::success(&format!(
        "Saved modified task definition to {}",
        output::path(json_path.display())
    ));
    Ok(())
}
