//! Salter - AWS SSM Parameter Store from the command line.

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use salter::cli::output;
use salter::cli::{execute, normalize_args, Cli};
use salter::core::constants;
use salter::error::Error;

fn main() {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("salter=debug")
        } else {
            EnvFilter::new("salter=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    let action = cli.action;
    if let Err(e) = execute(cli) {
        let suggestion = match (&e, action) {
            (Error::Usage(_), Some(_)) => Some("run: salter --action <action> -h"),
            (Error::Usage(_), None) => Some("run: salter -h"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
