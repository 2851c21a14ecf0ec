//! Core domain models for gomod-outdated
//!
//! This module contains the module record type decoded from
//! `go list -u -m -json all` and its derived accessors.

mod module;

pub use module::{Module, ModuleError};
