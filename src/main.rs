//! gomod-outdated - Report outdated Go module dependencies
//!
//! Usage: `go list -u -m -json all | gomod-outdated --update --direct`

use anyhow::Context;
use clap::Parser;
use gomod_outdated::cli::CliArgs;
use gomod_outdated::runner::{DeferredExit, RunOptions, Runner};
use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_tracing(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize diagnostics on stderr; RUST_LOG overrides the default level
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "gomod_outdated=debug"
    } else {
        "gomod_outdated=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let runner = Runner::new(RunOptions::from_cli(&args));
    let mut exit = DeferredExit::new();
    let mut stdout = io::stdout().lock();

    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            runner.run(file, &mut stdout, &mut exit)?;
        }
        None => runner.run(io::stdin().lock(), &mut stdout, &mut exit)?,
    }
    stdout.flush()?;

    Ok(match exit.code() {
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        None => ExitCode::SUCCESS,
    })
}
