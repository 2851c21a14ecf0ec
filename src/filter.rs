//! Module filter configuration
//!
//! This module provides the ModuleFilter struct that selects which decoded
//! modules make it into the report.

use crate::domain::Module;

/// Filter configuration for the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuleFilter {
    /// Keep only modules with an available update
    pub update: bool,
    /// Keep only direct dependencies
    pub direct: bool,
}

impl ModuleFilter {
    /// Create a new ModuleFilter that keeps every module
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether only outdated modules are kept
    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    /// Set whether only direct dependencies are kept
    pub fn with_direct(mut self, direct: bool) -> Self {
        self.direct = direct;
        self
    }

    /// Check if a single module passes the filter
    pub fn matches(&self, module: &Module) -> bool {
        if self.update && !module.has_update() {
            return false;
        }
        if self.direct && module.indirect {
            return false;
        }
        true
    }

    /// Select the matching modules, preserving their relative order
    pub fn apply(&self, modules: &[Module]) -> Vec<Module> {
        modules
            .iter()
            .filter(|m| self.matches(m))
            .cloned()
            .collect()
    }
}
