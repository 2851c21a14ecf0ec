//! Go module records as reported by `go list -m -json`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error reported by the Go tool while loading a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModuleError {
    /// Error message
    pub err: String,
}

/// A single module entry
///
/// Field names follow the Go tool's JSON output so that records survive a
/// decode/encode round trip unchanged. Fields the tool omits when empty are
/// omitted on output as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Module {
    /// Module path
    pub path: String,
    /// Module version (empty for the main module)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    /// Replacement module, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<Box<Module>>,
    /// Time the version was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    /// Available update, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<Box<Module>>,
    /// Whether this is the main module
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub main: bool,
    /// Whether this module is only an indirect dependency of the main module
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub indirect: bool,
    /// Directory holding the module's files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// Path to the module's go.mod file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go_mod: Option<String>,
    /// Go version declared by the module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go_version: Option<String>,
    /// Deprecation message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    /// Error loading the module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ModuleError>,
}

impl Module {
    /// Creates a new module with the given path and version
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
            replace: None,
            time: None,
            update: None,
            main: false,
            indirect: false,
            dir: None,
            go_mod: None,
            go_version: None,
            deprecated: None,
            error: None,
        }
    }

    /// Sets the available update version (builder pattern)
    pub fn with_update(mut self, version: impl Into<String>) -> Self {
        let update = Module::new(self.path.clone(), version);
        self.update = Some(Box::new(update));
        self
    }

    /// Sets the available update together with its creation time
    pub fn with_update_at(mut self, version: impl Into<String>, time: DateTime<Utc>) -> Self {
        let update = Module::new(self.path.clone(), version).with_time(time);
        self.update = Some(Box::new(update));
        self
    }

    /// Sets the creation time of the current version
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    /// Sets the replacement module
    pub fn with_replace(mut self, replace: Module) -> Self {
        self.replace = Some(Box::new(replace));
        self
    }

    /// Marks the module as an indirect dependency
    pub fn indirect(mut self) -> Self {
        self.indirect = true;
        self
    }

    /// The module whose versions are effectively in use
    fn effective(&self) -> &Module {
        self.replace.as_deref().unwrap_or(self)
    }

    /// Returns the version in use, honoring replacements
    pub fn current_version(&self) -> &str {
        &self.effective().version
    }

    /// Returns the available update version, or an empty string
    pub fn new_version(&self) -> &str {
        self.effective()
            .update
            .as_deref()
            .map(|u| u.version.as_str())
            .unwrap_or("")
    }

    /// Returns true if an update exists and differs from the current version
    pub fn has_update(&self) -> bool {
        let new_version = self.new_version();
        !new_version.is_empty() && new_version != self.current_version()
    }

    /// Synonym of [`Module::has_update`]
    pub fn is_outdated(&self) -> bool {
        self.has_update()
    }

    /// Returns true if the current version was published after its update
    pub fn invalid_timestamp(&self) -> bool {
        let module = self.effective();
        let update_time = module.update.as_deref().and_then(|u| u.time);
        match (module.time, update_time) {
            (Some(current), Some(update)) => current > update,
            _ => false,
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if !self.current_version().is_empty() {
            write!(f, "@{}", self.current_version())?;
        }
        if self.has_update() {
            write!(f, " [{}]", self.new_version())?;
        }
        Ok(())
    }
}
