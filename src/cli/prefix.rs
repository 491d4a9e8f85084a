//! Get-by-prefix command.

use crate::cli::{output, require};
use crate::core::prefix::fetch_by_prefix;
use crate::core::store::{self, ParameterStore};
use crate::error::Result;

const MISSING: &str = "-prefix and -o <output-base> required for 'get-by-prefix'";

/// Export every parameter under `prefix` to `<output_base>.env` and `.json`.
pub fn execute(prefix: Option<&str>, output_base: Option<&str>, region: &str) -> Result<()> {
    let prefix = require(prefix, MISSING)?;
    let output_base = require(output_base, MISSING)?;

    let store = store::connect(region)?;
    execute_with(store.as_ref(), prefix, output_base)
}

pub fn execute_with(store: &dyn ParameterStore, prefix: &str, output_base: &str) -> Result<()> {
    let export = fetch_by_prefix(store, prefix)?;
    if export.is_empty() {
        output::warn(&format!("No parameters found under {}", prefix));
    }

    let (env_path, json_path) = export.save(output_base)?;
    output::success(&format!(
        "Saved .env to {} and task-definition JSON to {}",
        output::path(env_path.display()),
        output::path(json_path.display())
    ));
    Ok(())
}
