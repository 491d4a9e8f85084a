//! Command-line interface.

pub mod generate;
pub mod help;
pub mod output;
pub mod parameter;
pub mod prefix;
pub mod template;

use clap::{ArgAction, Parser};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use tracing::debug;

use crate::core::config::Config;
use crate::core::constants;
use crate::error::{Error, Result};

/// Salter - AWS SSM Parameter Store from the command line.
#[derive(Parser, Debug)]
#[command(
    name = "salter",
    about = "Read and write AWS SSM parameters, with task-definition and .env conversions",
    version,
    disable_help_flag = true
)]
pub struct Cli {
    /// Action to perform
    #[arg(long, value_enum)]
    pub action: Option<Action>,

    /// Parameter name (get, put)
    #[arg(long)]
    pub name: Option<String>,

    /// Parameter value (put)
    #[arg(long)]
    pub value: Option<String>,

    /// Source file: task-definition JSON, or .env for generate
    #[arg(short = 's', long = "source")]
    pub source: Option<PathBuf>,

    /// Parameter type for put: string, stringlist or securestring
    #[arg(long = "type", default_value = "string")]
    pub kind: String,

    /// Output file (generate), output base (get-by-prefix) or dated output prefix (get -s)
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// AWS region (defaults to the config file's region)
    #[arg(long)]
    pub region: Option<String>,

    /// Path prefix for get-by-prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Tool configuration file
    #[arg(long, default_value = constants::CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Show help for the selected action
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,
}

/// Actions selectable with `--action`.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Get,
    Put,
    PutFromTemplate,
    Generate,
    GetByPrefix,
}

/// Long flags that may also be spelled with a single dash (`-action get`).
const LONG_FLAGS: &[&str] = &[
    "action", "name", "value", "source", "type", "output", "region", "prefix", "config",
    "verbose", "help", "version",
];

/// Flags whose next argument is a value and must not be rewritten.
const VALUE_FLAGS: &[&str] = &[
    "--action", "--name", "--value", "--source", "--type", "--output", "--region", "--prefix",
    "--config", "-s", "-o",
];

/// Rewrite single-dash long flags (`-action`, `-name=x`) to their
/// double-dash form so both spellings parse.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for arg in args {
        if passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let rewritten = match text.strip_prefix('-') {
            Some(rest) if !rest.starts_with('-') => {
                let flag = rest.split_once('=').map_or(rest, |(f, _)| f);
                LONG_FLAGS.contains(&flag).then(|| format!("-{}", text))
            }
            _ => None,
        };
        let text = rewritten.unwrap_or_else(|| text.to_string());

        expect_value = VALUE_FLAGS.contains(&text.as_str());
        out.push(OsString::from(text));
    }

    out
}

/// Execute the parsed command line.
///
/// Flags are validated for the selected action before any remote call.
///
/// # Errors
///
/// Returns `Error::Usage` for missing flags, otherwise the error of the
/// failed operation.
pub fn execute(cli: Cli) -> Result<()> {
    if cli.help {
        help::show(cli.action);
        return Ok(());
    }

    let (config, created) = Config::load_or_create(&cli.config)?;
    if created {
        output::dimmed(&format!("Generated default {}", cli.config.display()));
    }
    let region = config.resolve_region(cli.region.as_deref());
    debug!(action = ?cli.action, region = %region, "dispatching");

    match (cli.action, cli.source.as_deref()) {
        (Some(Action::Generate), source) => {
            generate::execute(source, cli.output.as_deref(), &config)
        }
        (Some(Action::PutFromTemplate), source) => template::put(source, &region, &config),
        (None | Some(Action::Get), Some(source)) => {
            template::fetch(source, cli.output.as_deref(), &region)
        }
        (None, None) => {
            help::usage();
            Err(Error::Usage("no action specified".to_string()))
        }
        (Some(Action::Get), None) => parameter::get(cli.name.as_deref(), &region),
        (Some(Action::Put), _) => parameter::put(
            cli.name.as_deref(),
            cli.value.as_deref(),
            &cli.kind,
            &region,
        ),
        (Some(Action::GetByPrefix), _) => {
            prefix::execute(cli.prefix.as_deref(), cli.output.as_deref(), &region)
        }
    }
}

/// Fetch a required flag or fail with a usage error.
///
/// An empty value counts as missing.
pub(crate) fn require<'a, T>(value: Option<&'a T>, message: &str) -> Result<&'a T>
where
    T: AsRef<OsStr> + ?Sized,
{
    value
        .filter(|v| !v.as_ref().is_empty())
        .ok_or_else(|| Error::Usage(message.to_string()))
}
