//! Generate command - build a task definition from a .env file.

use std::path::Path;

use crate::cli::{output, require};
use crate::core::config::Config;
use crate::core::generate;
use crate::error::Result;

const MISSING: &str = "-s <env-file> and -o <output.json> required for 'generate'";

/// Classify every entry of `source` and write the task definition to `output`.
pub fn execute(source: Option<&Path>, output_file: Option<&str>, config: &Config) -> Result<()> {
    let source = require(source, MISSING)?;
    let output_file = Path::new(require(output_file, MISSING)?);

    generate::generate(source, output_file, config)?;

    output::success(&format!(
        "Generated task definition saved to {}",
        output::path(output_file.display())
    ));
    Ok(())
}
