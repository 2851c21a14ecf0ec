//! Report runner coordinating the whole workflow
//!
//! This module provides:
//! - Workflow coordination: decode → filter → render → exit decision
//! - The exit requester seam used instead of terminating the process directly

use crate::cli::CliArgs;
use crate::decoder::decode_modules;
use crate::domain::Module;
use crate::error::AppError;
use crate::filter::ModuleFilter;
use crate::output::{render, OutputConfig, OutputStyle};
use std::io::{Read, Write};
use tracing::debug;

/// Exit status requested when outdated modules are found
pub const OUTDATED_EXIT_CODE: i32 = 1;

/// Receives the run's request to end the process with a status code
pub trait ExitRequester {
    /// Request termination with the given status code
    fn request_exit(&mut self, code: i32);
}

/// Exit requester that records the status for the caller to act on
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeferredExit {
    code: Option<i32>,
}

impl DeferredExit {
    /// Create a requester with no pending exit
    pub fn new() -> Self {
        Self::default()
    }

    /// The requested status code, if any
    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl ExitRequester for DeferredExit {
    fn request_exit(&mut self, code: i32) {
        self.code = Some(code);
    }
}

/// Options controlling a single run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Keep only modules with an available update
    pub update: bool,
    /// Keep only direct dependencies
    pub direct: bool,
    /// Request a non-zero exit when outdated modules remain
    pub exit_with_non_zero: bool,
    /// Output configuration
    pub output: OutputConfig,
}

impl RunOptions {
    /// Create options with every switch off and the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            update: args.update,
            direct: args.direct,
            exit_with_non_zero: args.ci,
            output: OutputConfig::new(args.style, !args.no_color),
        }
    }

    /// Set the update filter
    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    /// Set the direct filter
    pub fn with_direct(mut self, direct: bool) -> Self {
        self.direct = direct;
        self
    }

    /// Set whether outdated modules request a non-zero exit
    pub fn with_exit_with_non_zero(mut self, enabled: bool) -> Self {
        self.exit_with_non_zero = enabled;
        self
    }

    /// Set the output style
    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.output.style = style;
        self
    }

    /// Set whether colors are used
    pub fn with_color(mut self, color: bool) -> Self {
        self.output.color = color;
        self
    }

    /// The module filter described by these options
    pub fn filter(&self) -> ModuleFilter {
        ModuleFilter::new()
            .with_update(self.update)
            .with_direct(self.direct)
    }
}

/// Returns true if any of the modules has an update available
pub fn has_outdated(modules: &[Module]) -> bool {
    modules.iter().any(Module::has_update)
}

/// Runner for a single report
pub struct Runner {
    options: RunOptions,
}

impl Runner {
    /// Create a new runner
    pub fn new(options: RunOptions) -> Self {
        Self { options }
    }

    /// Decode `input`, render the filtered report to `output`, and ask
    /// `exit` for a non-zero status if required
    ///
    /// The handles are borrowed; they are neither flushed nor closed here.
    pub fn run<R: Read>(
        &self,
        input: R,
        output: &mut dyn Write,
        exit: &mut dyn ExitRequester,
    ) -> Result<(), AppError> {
        let modules = decode_modules(input)?;
        let filtered = self.options.filter().apply(&modules);
        debug!(
            decoded = modules.len(),
            kept = filtered.len(),
            style = %self.options.output.style,
            "filtered modules"
        );

        render(&filtered, self.options.output, output)?;

        if self.options.exit_with_non_zero && has_outdated(&filtered) {
            debug!(code = OUTDATED_EXIT_CODE, "outdated modules found, requesting exit");
            exit.request_exit(OUTDATED_EXIT_CODE);
        }

        Ok(())
    }
}
