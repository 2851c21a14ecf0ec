//! Pretty output formatter
//!
//! One line per module: the path colored by update severity, the current
//! version, and a per-segment diff towards the available update.

use crate::domain::Module;
use crate::error::AppError;
use crate::output::version_diff::{parse_version, UpdateSeverity, VersionDiff};
use crate::output::OutputFormatter;
use colored::{Color, Colorize};
use std::io::Write;

/// Pretty formatter for compact colorized listings
pub struct PrettyFormatter {
    /// Whether to use colors
    color: bool,
}

/// A module resolved for display, before any text is written
struct PrettyLine<'a> {
    path: &'a str,
    current: &'a str,
    severity: UpdateSeverity,
    diff: Option<VersionDiff>,
}

impl<'a> PrettyLine<'a> {
    fn from_module(module: &'a Module) -> Result<Self, AppError> {
        let current = module.current_version();
        let new = module.new_version();

        if current == new || new.is_empty() {
            return Ok(Self {
                path: &module.path,
                current,
                severity: UpdateSeverity::UpToDate,
                diff: None,
            });
        }

        let current_parsed = parse_version(&module.path, current)?;
        let new_parsed = parse_version(&module.path, new)?;
        let diff = VersionDiff::between(&current_parsed, &new_parsed);

        Ok(Self {
            path: &module.path,
            current,
            severity: diff.severity(),
            diff: Some(diff),
        })
    }
}

impl PrettyFormatter {
    /// Create a new pretty formatter
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn severity_color(severity: UpdateSeverity) -> Color {
        match severity {
            UpdateSeverity::UpToDate => Color::Green,
            UpdateSeverity::Compatible => Color::Yellow,
            UpdateSeverity::Breaking => Color::Red,
        }
    }

    fn segment_color(changed: bool) -> Color {
        if changed {
            Color::Yellow
        } else {
            Color::White
        }
    }

    /// Render the `-> major.minor.patch[-pre]` suffix
    pub fn format_diff(&self, diff: &VersionDiff) -> String {
        let mut output = String::from("-> ");
        output.push_str(&self.paint(
            &format!("{}.", diff.new.major),
            Self::segment_color(diff.major_changed),
        ));
        output.push_str(&self.paint(
            &format!("{}.", diff.new.minor),
            Self::segment_color(diff.minor_changed),
        ));
        output.push_str(&self.paint(
            &diff.new.patch.to_string(),
            Self::segment_color(diff.patch_changed),
        ));
        if let Some(pre) = diff.prerelease() {
            output.push_str(&self.paint(
                &format!("-{}", pre),
                Self::segment_color(diff.prerelease_changed),
            ));
        }
        output
    }
}

impl OutputFormatter for PrettyFormatter {
    fn format(&self, modules: &[Module], writer: &mut dyn Write) -> Result<(), AppError> {
        // Resolve every line first so a bad version aborts before any output
        let lines = modules
            .iter()
            .map(PrettyLine::from_module)
            .collect::<Result<Vec<_>, _>>()?;

        let path_width = lines.iter().map(|l| l.path.chars().count()).max().unwrap_or(0);
        let version_width = lines
            .iter()
            .map(|l| l.current.chars().count())
            .max()
            .unwrap_or(0);

        for line in &lines {
            let path = self.paint(line.path, Self::severity_color(line.severity));
            let path_pad = " ".repeat(path_width - line.path.chars().count() + 1);
            let current = self.paint(line.current, Color::Blue);

            match &line.diff {
                Some(diff) => {
                    let version_pad =
                        " ".repeat(version_width - line.current.chars().count() + 1);
                    writeln!(
                        writer,
                        "{}{}{}{}{}",
                        path,
                        path_pad,
                        current,
                        version_pad,
                        self.format_diff(diff)
                    )?;
                }
                None => writeln!(writer, "{}{}{}", path, path_pad, current)?,
            }
        }

        Ok(())
    }
}
