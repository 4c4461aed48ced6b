use std::collections::{HashMap, HashSet};
use std::ops::AddAssign;

use serde_json::Value;

use super::document::{Document, TEXT_KEY};
use super::identifier::{IdScope, word_id};

/// Identifier to translated text, scoped to a single nested file.
pub type TranslationMap = HashMap<String, String>;

/// Counters produced by [`merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Words whose `str` was written from the translation map.
    pub applied: usize,
    /// Subset of `applied` where the new text differs from the old one.
    pub changed: usize,
    /// Words with a matching entry whose text is empty or whitespace.
    pub skipped_blank: usize,
    /// Non-blank map entries that no word in the document matched.
    pub unmatched: usize,
}

impl AddAssign for MergeStats {
    fn add_assign(&mut self, other: Self) {
        self.applied += other.applied;
        self.changed += other.changed;
        self.skipped_blank += other.skipped_blank;
        self.unmatched += other.unmatched;
    }
}

/// Entries that are present but empty mean "not translated yet".
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Write translations into the `str` field of every matching word.
///
/// Ids are derived exactly as the extractor derives them, so an extract
/// followed by a merge with the same scope addresses the same words. Words
/// without a non-blank entry keep their text, and no field other than `str`
/// is touched.
pub fn merge(
    document: &mut Document,
    translations: &TranslationMap,
    scope: IdScope<'_>,
) -> MergeStats {
    let mut stats = MergeStats::default();
    if translations.is_empty() {
        return stats;
    }

    let mut matched: HashSet<String> = HashSet::new();

    document.for_each_word_mut(|label, index, word| {
        let id = word_id(scope, label, index);
        let Some(text) = translations.get(&id) else {
            return;
        };
        matched.insert(id);

        if is_blank(text) {
            stats.skipped_blank += 1;
            return;
        }

        if word.get(TEXT_KEY).and_then(Value::as_str) != Some(text.as_str()) {
            stats.changed += 1;
        }
        word.insert(TEXT_KEY.to_string(), Value::String(text.clone()));
        stats.applied += 1;
    });

    stats.unmatched = translations
        .iter()
        .filter(|(id, text)| !is_blank(text) && !matched.contains(id.as_str()))
        .count();

    stats
}
