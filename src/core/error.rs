use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised by the extraction/merge core.
///
/// Every variant carries the path it concerns so the per-file loop can
/// report it without extra bookkeeping.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Directory '{}' does not exist or is not a directory", path.display())]
    MissingRoot { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Root of JSON file must be an object: {}", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Value of \"{key}\" in {} must be a string", path.display())]
    FlatValueNotString { path: PathBuf, key: String },

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(
        "Backup file {} already exists.\n\
         Hint: move or delete the previous backup before applying in place again.",
        path.display()
    )]
    BackupExists { path: PathBuf },

    #[error("{} is not under the input root", path.display())]
    NotUnderRoot { path: PathBuf },

    #[error(
        "Output '{}' is the input folder.\n\
         Hint: choose a different output folder.",
        path.display()
    )]
    OutputIsInput { path: PathBuf },
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}
