//! JSON output formatter for machine processing
//!
//! Modules are written back as a pretty-printed array using the same field
//! names the Go tool emits, so the output can be decoded again.

use crate::domain::Module;
use crate::error::AppError;
use crate::output::OutputFormatter;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, modules: &[Module], writer: &mut dyn Write) -> Result<(), AppError> {
        if modules.is_empty() {
            return Ok(());
        }
        serde_json::to_writer_pretty(&mut *writer, modules).map_err(std::io::Error::from)?;
        writeln!(writer)?;
        Ok(())
    }
}
