//! Identifier scheme shared by the extractor and the merger.
//!
//! A word is located by `(file, labelName, index)`, where `index` is the
//! zero-based position of the word inside its label's `wordDataArray`.
//! Two renderings exist depending on scope:
//!
//! - corpus scope (CSV catalogs): `"{file}::{labelName}:{index}"`
//! - file scope (flat JSON paired 1:1 with a nested file): `"{labelName}_{index}"`
//!
//! Ids depend on label order, label names and word order. Reordering or
//! renaming labels in the source invalidates previously extracted ids.

use std::path::{Component, Path};

use super::error::{Error, Result};

/// Which identifier rendering a workflow uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdScope<'a> {
    /// Unique across the whole input root. `file` is the `/`-separated
    /// path relative to that root.
    Corpus { file: &'a str },
    /// Unique only inside one file.
    File,
}

/// Derive the identifier of the word at `index` in label `label_name`.
///
/// # Examples
///
/// ```
/// use wordloc::core::{IdScope, word_id};
///
/// assert_eq!(word_id(IdScope::File, "greeting", 1), "greeting_1");
/// assert_eq!(
///     word_id(IdScope::Corpus { file: "dlc/file.json" }, "greeting", 0),
///     "dlc/file.json::greeting:0"
/// );
/// ```
pub fn word_id(scope: IdScope<'_>, label_name: &str, index: usize) -> String {
    match scope {
        IdScope::Corpus { file } => format!("{}::{}:{}", file, label_name, index),
        IdScope::File => format!("{}_{}", label_name, index),
    }
}

/// Path of `path` relative to `root`, joined with `/` on every platform.
///
/// Catalogs written on one OS must apply on another, so native separators
/// never leak into ids.
pub fn relative_id_path(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| Error::NotUnderRoot {
        path: path.to_path_buf(),
    })?;

    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    Ok(parts.join("/"))
}
