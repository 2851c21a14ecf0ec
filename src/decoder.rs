//! Decoder for the `go list -m -json` record stream
//!
//! The Go tool prints one JSON object per module, back to back. This module
//! reads the whole stream into an ordered list of [`Module`] records.

use crate::domain::Module;
use crate::error::DecodeError;
use serde_json::Deserializer;
use std::io::{BufReader, Read};
use tracing::debug;

/// Decode every module record from `reader` until end of input
///
/// Records keep their input order. The first malformed record aborts the
/// whole decode; no partial list is returned.
pub fn decode_modules<R: Read>(reader: R) -> Result<Vec<Module>, DecodeError> {
    let stream = Deserializer::from_reader(BufReader::new(reader)).into_iter::<Module>();

    let mut modules = Vec::new();
    for (index, record) in stream.enumerate() {
        let module = record.map_err(|e| DecodeError::malformed(index, e))?;
        if module.path.is_empty() {
            return Err(DecodeError::empty_path(index));
        }
        modules.push(module);
    }

    debug!(count = modules.len(), "decoded module records");
    Ok(modules)
}
