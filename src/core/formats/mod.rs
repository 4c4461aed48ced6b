//! Flat representations of extracted strings.
//!
//! - `catalog`: one corpus-wide CSV catalog with long-form ids
//! - `flat`: one JSON object per nested file with short-form ids

pub mod catalog;
pub mod flat;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serialize `value` as pretty JSON with `indent` spaces and a trailing newline.
///
/// serde_json never escapes non-ASCII characters, so translated text is
/// written verbatim.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> serde_json::Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
