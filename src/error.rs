//! Application error types using thiserror
//!
//! Error hierarchy:
//! - DecodeError: Malformed or truncated module records on the input stream
//! - VersionParseError: Version strings that are not semantic versions
//! - WriteError: Failures of the output sink

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Input decoding errors
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Semantic version parsing errors (pretty style only)
    #[error(transparent)]
    VersionParse(#[from] VersionParseError),

    /// Output errors
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        AppError::Write(WriteError { source })
    }
}

/// Errors related to decoding the module record stream
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The record is not valid JSON, is truncated, or has wrongly typed fields
    #[error("failed to decode module record #{index}: {source}")]
    Malformed {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The record decoded but carries an empty module path
    #[error("module record #{index} has an empty Path")]
    EmptyPath { index: usize },
}

/// A version string could not be parsed as a semantic version
#[derive(Error, Debug)]
#[error("invalid semantic version '{version}' for module {module}: {source}")]
pub struct VersionParseError {
    pub module: String,
    pub version: String,
    #[source]
    pub source: semver::Error,
}

/// The output sink failed
#[derive(Error, Debug)]
#[error("failed to write output: {source}")]
pub struct WriteError {
    #[source]
    pub source: std::io::Error,
}

impl DecodeError {
    /// Creates a new Malformed error
    pub fn malformed(index: usize, source: serde_json::Error) -> Self {
        DecodeError::Malformed { index, source }
    }

    /// Creates a new EmptyPath error
    pub fn empty_path(index: usize) -> Self {
        DecodeError::EmptyPath { index }
    }
}

impl VersionParseError {
    /// Creates a new VersionParseError
    pub fn new(
        module: impl Into<String>,
        version: impl Into<String>,
        source: semver::Error,
    ) -> Self {
        VersionParseError {
            module: module.into(),
            version: version.into(),
            source,
        }
    }
}
