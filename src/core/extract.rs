use super::document::Document;
use super::formats::catalog::CatalogRow;
use super::identifier::{IdScope, word_id};

/// One translatable string pulled out of a nested document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub label: String,
    pub index: usize,
    pub text: String,
}

impl Entry {
    /// Catalog row for this entry with an empty `translated_string`.
    pub fn into_catalog_row(self, file: &str) -> CatalogRow {
        CatalogRow {
            file: file.to_string(),
            id: self.id,
            original_string: self.text,
            translated_string: String::new(),
        }
    }
}

/// Flatten every word of `document` into an [`Entry`], in traversal order.
///
/// Exactly one entry is produced per word. The document is not modified.
pub fn extract(document: &Document, scope: IdScope<'_>) -> Vec<Entry> {
    document
        .words()
        .into_iter()
        .map(|word| Entry {
            id: word_id(scope, word.label, word.index),
            label: word.label.to_string(),
            index: word.index,
            text: word.text.to_string(),
        })
        .collect()
}
