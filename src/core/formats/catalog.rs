//! Corpus-wide CSV catalog.
//!
//! Header: `file,id,original_string,translated_string`. One row per word,
//! `id` in long form. Translators fill `translated_string` only.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::core::merge::{TranslationMap, is_blank};

pub const CATALOG_HEADER: [&str; 4] = ["file", "id", "original_string", "translated_string"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub file: String,
    pub id: String,
    #[serde(default)]
    pub original_string: String,
    pub translated_string: String,
}

/// Translations from a catalog, grouped by the `file` column.
#[derive(Debug, Default)]
pub struct CorpusTranslations {
    by_file: HashMap<String, TranslationMap>,
    /// Rows whose `translated_string` was empty or whitespace.
    pub blank_rows: usize,
}

impl CorpusTranslations {
    /// Add one row. Blank translations are dropped; a repeated id replaces
    /// the earlier value.
    ///
    /// Non-blank text is kept verbatim. Leading and trailing whitespace is not
    /// stripped, so `" Hola "` is written into the document with its spaces.
    pub fn insert(&mut self, row: CatalogRow) {
        if is_blank(&row.translated_string) {
            self.blank_rows += 1;
            return;
        }
        self.by_file
            .entry(row.file)
            .or_default()
            .insert(row.id, row.translated_string);
    }

    pub fn for_file(&self, file: &str) -> Option<&TranslationMap> {
        self.by_file.get(file)
    }

    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.by_file.keys().map(String::as_str)
    }

    pub fn translation_count(&self) -> usize {
        self.by_file.values().map(HashMap::len).sum()
    }
}

pub fn write_catalog_to<W: Write>(writer: W, rows: &[CatalogRow]) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written explicitly so an empty corpus still yields a valid header
    wtr.write_record(CATALOG_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write `rows` to `path`, creating parent directories.
pub fn write_catalog(path: &Path, rows: &[CatalogRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_catalog_to(file, rows).map_err(|e| Error::csv(path, e))
}

pub fn read_catalog_from<R: Read>(reader: R) -> csv::Result<CorpusTranslations> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut translations = CorpusTranslations::default();
    for row in rdr.deserialize::<CatalogRow>() {
        translations.insert(row?);
    }
    Ok(translations)
}

pub fn read_catalog(path: &Path) -> Result<CorpusTranslations> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    read_catalog_from(file).map_err(|e| Error::csv(path, e))
}
