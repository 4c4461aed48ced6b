//! Extraction/merge core.
//!
//! ```text
//! nested documents ──extract──▶ flat representation (CSV catalog | flat JSON)
//!                                       │ translators fill in text
//! nested documents ◀──merge──── flat representation
//! ```
//!
//! The identifier scheme in [`identifier`] is the only contract between the
//! two directions. Nothing here prints; errors are returned to the caller.

pub mod backup;
pub mod document;
pub mod error;
pub mod extract;
pub mod formats;
pub mod identifier;
pub mod merge;
pub mod scanner;
pub mod workflow;

pub use backup::{DEFAULT_BACKUP_SUFFIX, backup_path, replace_with_backup};
pub use document::{Document, WordRef};
pub use error::{Error, Result};
pub use extract::{Entry, extract};
pub use identifier::{IdScope, relative_id_path, word_id};
pub use merge::{MergeStats, TranslationMap, merge};
pub use scanner::{SourceFile, scan_json_files};
pub use workflow::{ApplyOptions, FileReport, Outcome, Target};
