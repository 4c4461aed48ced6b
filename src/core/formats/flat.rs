//! Per-file flat JSON: `{ "<labelName>_<index>": "<text>", ... }`.
//!
//! A flat file sits at the same relative path under its own root as the
//! nested file it belongs to.

use std::{fs, io::ErrorKind, path::Path};

use serde_json::{Map, Value};

use super::to_pretty_json;
use crate::core::error::{Error, Result};
use crate::core::extract::Entry;
use crate::core::merge::TranslationMap;

pub const DEFAULT_FLAT_INDENT: usize = 2;

/// Flat JSON object for `entries`, preserving their order.
pub fn flat_object(entries: &[Entry]) -> Map<String, Value> {
    entries
        .iter()
        .map(|e| (e.id.clone(), Value::String(e.text.clone())))
        .collect()
}

/// Write `entries` as a flat JSON object, creating parent directories.
pub fn write_flat(path: &Path, entries: &[Entry], indent: usize) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let content = to_pretty_json(&flat_object(entries), indent).map_err(|e| Error::json(path, e))?;
    fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// Load a flat translation file.
///
/// Returns `Ok(None)` when the file does not exist, which callers treat as
/// "no translations yet" for the paired nested file.
pub fn read_flat(path: &Path) -> Result<Option<TranslationMap>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(path, e)),
    };

    parse_flat(path, &content).map(Some)
}

pub fn parse_flat(path: &Path, content: &str) -> Result<TranslationMap> {
    let value: Value = serde_json::from_str(content).map_err(|e| Error::json(path, e))?;
    let Value::Object(map) = value else {
        return Err(Error::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    map.into_iter()
        .map(|(key, value)| match value {
            Value::String(text) => Ok((key, text)),
            _ => Err(Error::FlatValueNotString {
                path: path.to_path_buf(),
                key,
            }),
        })
        .collect()
}
