//! Purpose: Parse `key=value;...` argument strings into the TMT mapping document.
//! Exports: `parse`, `render`.
//! Role: Key-value half of the run-file contract (`variables` and `secrets`).
//! Invariants: Keys and values are never trimmed; segment bytes pass through literally.
//! Invariants: Empty or whitespace-only input renders as exactly `{}`.
//! Invariants: Duplicate keys keep their first position and take the last value.
use serde_json::{Map, Value};

use crate::core::error::{Error, ErrorKind};

/// Splits a raw argument into `(key, value)` pairs.
///
/// Segments are `;`-separated and the first `=` in each segment is the
/// delimiter, so values may themselves contain `=`. A segment with no `=`
/// (including the empty segment left by a trailing `;`) is malformed.
pub fn parse(input: &str) -> Result<Vec<(String, String)>, Error> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(';')
        .map(|segment| {
            segment
                .split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .ok_or_else(|| {
                    Error::new(ErrorKind::Malformed)
                        .with_message("segment has no `=` delimiter")
                        .with_segment(segment)
                        .with_hint("Pairs look like key=value, joined by `;`.")
                })
        })
        .collect()
}

/// Renders the mapping document for an optional pairs argument.
///
/// A missing argument renders like empty input: the two-byte `{}`. The
/// artifact document defaults to the empty string instead; the consuming
/// tool reads both byte patterns, so the mismatch stays.
pub fn render(input: Option<&str>) -> Result<String, Error> {
    let mut map = Map::new();
    for (key, value) in parse(input.unwrap_or_default())? {
        map.insert(key, Value::String(value));
    }
    Ok(Value::Object(map).to_string())
}
