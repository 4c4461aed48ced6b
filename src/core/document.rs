//! Nested message documents.
//!
//! Only `labelDataArray[*].labelName`, `labelDataArray[*].wordDataArray[*]`
//! and the `str` field of each word are interpreted. Everything else stays
//! an opaque `serde_json::Value` and is written back in its original key
//! order (serde_json is built with `preserve_order`).

use std::{fs, path::Path};

use serde_json::{Map, Value};

use super::error::{Error, Result};
use super::formats::to_pretty_json;

pub const LABELS_KEY: &str = "labelDataArray";
pub const LABEL_NAME_KEY: &str = "labelName";
pub const WORDS_KEY: &str = "wordDataArray";
pub const TEXT_KEY: &str = "str";

/// A word as seen by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRef<'a> {
    pub label: &'a str,
    /// Position inside the label's `wordDataArray`.
    pub index: usize,
    /// The `str` value, `""` when absent or not a string.
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Map<String, Value>,
}

impl Document {
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).map_err(|e| Error::json(path, e))?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(Error::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(path, &content)
    }

    /// All words in traversal order: labels in order, then words in order.
    ///
    /// Non-object entries are skipped but still occupy their index.
    pub fn words(&self) -> Vec<WordRef<'_>> {
        let mut words = Vec::new();
        let Some(labels) = self.root.get(LABELS_KEY).and_then(Value::as_array) else {
            return words;
        };

        for label in labels.iter().filter_map(Value::as_object) {
            let name = label_name(label);
            let Some(entries) = label.get(WORDS_KEY).and_then(Value::as_array) else {
                continue;
            };
            for (index, word) in entries.iter().enumerate() {
                if let Some(word) = word.as_object() {
                    words.push(WordRef {
                        label: name,
                        index,
                        text: word.get(TEXT_KEY).and_then(Value::as_str).unwrap_or(""),
                    });
                }
            }
        }

        words
    }

    /// Visit every word object mutably, in the same order as [`Document::words`].
    pub fn for_each_word_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&str, usize, &mut Map<String, Value>),
    {
        let Some(labels) = self.root.get_mut(LABELS_KEY).and_then(Value::as_array_mut) else {
            return;
        };

        for label in labels.iter_mut().filter_map(Value::as_object_mut) {
            let name = label_name(label).to_string();
            let Some(entries) = label.get_mut(WORDS_KEY).and_then(Value::as_array_mut) else {
                continue;
            };
            for (index, word) in entries.iter_mut().enumerate() {
                if let Some(word) = word.as_object_mut() {
                    visit(&name, index, word);
                }
            }
        }
    }

    pub fn word_count(&self) -> usize {
        self.words().len()
    }

    /// Pretty JSON with `indent` spaces, extended characters unescaped,
    /// trailing newline.
    pub fn to_pretty_string(&self, indent: usize) -> serde_json::Result<String> {
        to_pretty_json(&self.root, indent)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }
}

fn label_name(label: &Map<String, Value>) -> &str {
    label
        .get(LABEL_NAME_KEY)
        .and_then(Value::as_str)
        .unwrap_or("")
}
