//! Table output formatter
//!
//! This module provides:
//! - A small column-aligned table renderer with configurable borders
//! - The bordered (`default`) and markdown report styles built on it

use crate::domain::Module;
use crate::error::AppError;
use crate::output::OutputFormatter;
use std::io::Write;

/// Report column headers
const HEADERS: [&str; 5] = ["Module", "Version", "New Version", "Direct", "Valid Timestamps"];

/// Which outer borders a table draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Borders {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Borders {
    /// All four borders
    pub fn all() -> Self {
        Self {
            left: true,
            top: true,
            right: true,
            bottom: true,
        }
    }

    /// Left and right borders only, as markdown tables need
    pub fn sides() -> Self {
        Self {
            left: true,
            top: false,
            right: true,
            bottom: false,
        }
    }
}

/// A text table with upper-cased, centered headers and left-aligned cells
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    borders: Borders,
    /// Character used where horizontal and vertical rules meet
    center: char,
}

impl Table {
    /// Create a fully bordered table with the given headers
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_uppercase()).collect(),
            rows: Vec::new(),
            borders: Borders::all(),
            center: '+',
        }
    }

    /// Set which outer borders are drawn
    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Set the rule junction character
    pub fn with_center_separator(mut self, center: char) -> Self {
        self.center = center;
        self
    }

    /// Append a data row
    pub fn append(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }

    fn write_rule(&self, writer: &mut dyn Write, widths: &[usize]) -> std::io::Result<()> {
        let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        let center = self.center.to_string();
        let left = if self.borders.left { center.as_str() } else { "" };
        let right = if self.borders.right { center.as_str() } else { "" };
        writeln!(writer, "{}{}{}", left, segments.join(&center), right)
    }

    fn write_row(
        &self,
        writer: &mut dyn Write,
        cells: &[String],
        widths: &[usize],
        centered: bool,
    ) -> std::io::Result<()> {
        let formatted: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = width - cell.chars().count();
                if centered {
                    let left = pad / 2;
                    format!(" {}{}{} ", " ".repeat(left), cell, " ".repeat(pad - left))
                } else {
                    format!(" {}{} ", cell, " ".repeat(pad))
                }
            })
            .collect();
        let left = if self.borders.left { "|" } else { "" };
        let right = if self.borders.right { "|" } else { "" };
        writeln!(writer, "{}{}{}", left, formatted.join("|"), right)
    }

    /// Write the table
    pub fn render(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        let widths = self.column_widths();

        if self.borders.top {
            self.write_rule(writer, &widths)?;
        }
        self.write_row(writer, &self.headers, &widths, true)?;
        self.write_rule(writer, &widths)?;
        for row in &self.rows {
            self.write_row(writer, row, &widths, false)?;
        }
        if self.borders.bottom {
            self.write_rule(writer, &widths)?;
        }

        Ok(())
    }
}

/// Table formatter for the `default` and `markdown` styles
pub struct TableFormatter {
    /// Whether to draw a markdown table
    markdown: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new(markdown: bool) -> Self {
        Self { markdown }
    }

    /// Build the report table for the given modules
    pub fn build_table(&self, modules: &[Module]) -> Table {
        let mut table = Table::new(&HEADERS);
        if self.markdown {
            table = table
                .with_borders(Borders::sides())
                .with_center_separator('|');
        }

        for module in modules {
            table.append(vec![
                module.path.clone(),
                module.current_version().to_string(),
                module.new_version().to_string(),
                (!module.indirect).to_string(),
                (!module.invalid_timestamp()).to_string(),
            ]);
        }

        table
    }
}

impl OutputFormatter for TableFormatter {
    fn format(&self, modules: &[Module], writer: &mut dyn Write) -> Result<(), AppError> {
        if modules.is_empty() {
            return Ok(());
        }
        self.build_table(modules).render(writer)?;
        Ok(())
    }
}
