//! Output formatting for module reports
//!
//! This module provides:
//! - Table output (bordered or markdown) for human-readable display
//! - JSON output for machine processing
//! - Pretty output with colorized per-segment version diffs

mod json;
mod pretty;
mod table;
mod version_diff;

pub use json::JsonFormatter;
pub use pretty::PrettyFormatter;
pub use table::{Borders, Table, TableFormatter};
pub use version_diff::{parse_version, UpdateSeverity, VersionDiff};

use crate::domain::Module;
use crate::error::AppError;
use clap::ValueEnum;
use std::fmt;
use std::io::Write;

/// Output style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputStyle {
    /// Bordered table
    #[default]
    Default,
    /// Markdown table
    Markdown,
    /// JSON array of module records
    Json,
    /// Colorized compact listing with version diffs
    Pretty,
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputStyle::Default => "default",
            OutputStyle::Markdown => "markdown",
            OutputStyle::Json => "json",
            OutputStyle::Pretty => "pretty",
        };
        write!(f, "{}", name)
    }
}

/// Configuration for output formatting
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Output style
    pub style: OutputStyle,
    /// Whether to use colors (pretty style only)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            style: OutputStyle::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(style: OutputStyle, color: bool) -> Self {
        Self { style, color }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the given modules
    ///
    /// Implementations write nothing when `modules` is empty.
    fn format(&self, modules: &[Module], writer: &mut dyn Write) -> Result<(), AppError>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.style {
        OutputStyle::Default => Box::new(TableFormatter::new(false)),
        OutputStyle::Markdown => Box::new(TableFormatter::new(true)),
        OutputStyle::Json => Box::new(JsonFormatter::new()),
        OutputStyle::Pretty => Box::new(PrettyFormatter::new(config.color)),
    }
}

/// Render modules in the configured style; an empty list writes nothing
pub fn render(
    modules: &[Module],
    config: OutputConfig,
    writer: &mut dyn Write,
) -> Result<(), AppError> {
    if modules.is_empty() {
        return Ok(());
    }
    create_formatter(config).format(modules, writer)
}
