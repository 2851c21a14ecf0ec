//! CLI argument parsing module for gomod-outdated

use crate::output::OutputStyle;
use clap::builder::FalseyValueParser;
use clap::Parser;
use std::path::PathBuf;

/// Report outdated Go module dependencies
///
/// Reads the output of `go list -u -m -json all` and renders the modules
/// that have updates available.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gomod-outdated",
    version,
    about = "Report outdated Go module dependencies",
    after_help = "Example: go list -u -m -json all | gomod-outdated --update --direct"
)]
pub struct CliArgs {
    /// Read module records from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    // Filters
    /// List only modules with updates
    #[arg(short, long)]
    pub update: bool,

    /// List only direct dependencies
    #[arg(short, long)]
    pub direct: bool,

    /// Exit with status 1 if any outdated module is listed
    #[arg(long, env = "GOMOD_OUTDATED_CI", value_parser = FalseyValueParser::new())]
    pub ci: bool,

    // Output options
    /// Output style
    #[arg(
        long,
        value_enum,
        default_value_t = OutputStyle::Default,
        env = "GOMOD_OUTDATED_STYLE"
    )]
    pub style: OutputStyle,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose diagnostics on stderr
    #[arg(long)]
    pub verbose: bool,
}
