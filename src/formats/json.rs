//! JSON configuration files.

use serde_json::{Map, Value as JsonValue};

use super::MergeOutcome;
use crate::settings::OptionEntry;

/// Parse JSON content into an object.
///
/// Returns `None` when the content is not valid JSON or is not an object.
/// Key order is preserved.
pub fn parse(content: &str) -> Option<Map<String, JsonValue>> {
    match serde_json::from_str::<JsonValue>(content) {
        Ok(JsonValue::Object(map)) => Some(map),
        _ => None,
    }
}

/// Serialize an object with two-space indentation.
pub fn serialize(map: Map<String, JsonValue>) -> String {
    format!("{:#}", JsonValue::Object(map))
}

/// Apply `options` to the current file content.
///
/// Without a reset, unreadable content is replaced by an empty object and the
/// outcome is flagged as recovered; the parse error is never returned.
/// Option values keep their JSON type. A key/value option sets one key; a
/// free-form option has all of its pairs merged in, overwriting existing keys.
pub fn merge(current: &str, reset: bool, options: &[OptionEntry]) -> MergeOutcome {
    let (mut merged, recovered) = if reset {
        (Map::new(), false)
    } else {
        match parse(current) {
            Some(map) => (map, false),
            None => (Map::new(), true),
        }
    };

    for (key, value) in options.iter().flat_map(OptionEntry::json_pairs) {
        merged.insert(key, value);
    }

    MergeOutcome {
        content: serialize(merged),
        recovered,
        skipped_lines: Vec::new(),
    }
}
