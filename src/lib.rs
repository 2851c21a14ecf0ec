//! gomod-outdated - Go module update report library
//!
//! This library reads the record stream printed by
//! `go list -u -m -json all` and renders which modules have newer versions:
//! - Decoding of module records into typed structures
//! - Filtering by update availability and directness
//! - Table, markdown, JSON and pretty output styles

pub mod cli;
pub mod decoder;
pub mod domain;
pub mod error;
pub mod filter;
pub mod output;
pub mod runner;
