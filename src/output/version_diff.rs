//! Per-segment comparison of semantic versions
//!
//! This module only decides what changed between two versions. Turning a
//! [`VersionDiff`] into colored text is left to the formatters.

use crate::error::VersionParseError;
use semver::Version;

/// How far an update moves a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSeverity {
    /// No update, or the update equals the current version
    UpToDate,
    /// Same major version
    Compatible,
    /// Different major version
    Breaking,
}

/// Parse a module version, accepting the `v` prefix used by Go
pub fn parse_version(module: &str, version: &str) -> Result<Version, VersionParseError> {
    let raw = version.strip_prefix('v').unwrap_or(version);
    Version::parse(raw).map_err(|e| VersionParseError::new(module, version, e))
}

/// Which segments differ between the current and the new version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDiff {
    /// The version being moved to
    pub new: Version,
    pub major_changed: bool,
    pub minor_changed: bool,
    pub patch_changed: bool,
    pub prerelease_changed: bool,
}

impl VersionDiff {
    /// Compare `current` against `new`
    pub fn between(current: &Version, new: &Version) -> Self {
        Self {
            new: new.clone(),
            major_changed: current.major != new.major,
            minor_changed: current.minor != new.minor,
            patch_changed: current.patch != new.patch,
            prerelease_changed: current.pre != new.pre,
        }
    }

    /// Severity of moving to the new version
    pub fn severity(&self) -> UpdateSeverity {
        if self.major_changed {
            UpdateSeverity::Breaking
        } else {
            UpdateSeverity::Compatible
        }
    }

    /// Prerelease of the new version, if any
    pub fn prerelease(&self) -> Option<&str> {
        if self.new.pre.is_empty() {
            None
        } else {
            Some(self.new.pre.as_str())
        }
    }
}
