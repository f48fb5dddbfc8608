//! envcheck - read, validate, and coerce environment variables.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Resolve one variable through the core session and print the result.
//!
//! Does NOT handle:
//! - Validation/coercion logic (see `envcheck-core`).
//!
//! Invariants:
//! - `.env` files are loaded BEFORE resolution so file values can back the
//!   lookup; real environment values still win (no overwrite).
//! - The resolved value is the only thing written to stdout on success;
//!   diagnostics go to stderr.

mod args;
mod error;

use args::Cli;
use clap::{CommandFactory, Parser, error::ErrorKind};
use envcheck_core::{EnvSession, LoadOptions, SettingsOverrides};
use error::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    std::process::exit(run().await.as_i32());
}

async fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                // Help counts as an unusable invocation, like a missing
                // --var: nothing was resolved.
                ErrorKind::DisplayHelp => ExitCode::Usage,
                ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::Usage,
            };
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(name) = cli.var.clone() else {
        let _ = Cli::command().print_help();
        return ExitCode::Usage;
    };

    let mut session = EnvSession::new();
    if cli.verbose {
        session.configure(SettingsOverrides {
            verbose: Some(true),
            ..Default::default()
        });
    }

    // Load .env before resolution so file values can back the lookup.
    session.load_env(&LoadOptions::new()).await;

    let options = match cli.to_options() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::Failure;
        }
    };

    match session.get(&name, &options) {
        Ok(Some(value)) => {
            println!("{value}");
            ExitCode::Success
        }
        Ok(None) => {
            println!("undefined");
            ExitCode::Failure
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::Failure
        }
    }
}
