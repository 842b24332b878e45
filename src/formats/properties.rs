//! Java-properties style files: one `key=value` pair per line.

use super::options_map::{line_ending, OptionsMap, ParsedOptions};
use super::MergeOutcome;
use crate::settings::OptionEntry;

/// Delimiter between key and value.
pub const DELIMITER: char = '=';

/// Parse `key=value` content. Lines without `=` are skipped.
pub fn parse(content: &str) -> ParsedOptions {
    OptionsMap::parse(content, DELIMITER)
}

/// Apply `options` to the current file content.
///
/// A reset starts from an empty mapping; nothing in a properties file is
/// preserved. The file's line ending is kept and free-form options are
/// skipped.
pub fn merge(current: &str, reset: bool, options: &[OptionEntry]) -> MergeOutcome {
    let (mut merged, skipped) = if reset {
        (OptionsMap::new(), Vec::new())
    } else {
        let parsed = parse(current);
        (parsed.options, parsed.skipped)
    };

    for (key, value) in options.iter().filter_map(|e| e.key().zip(e.value())) {
        merged.insert(key, value.to_text());
    }

    MergeOutcome {
        content: merged.serialize(DELIMITER, line_ending(current)),
        recovered: false,
        skipped_lines: skipped,
    }
}
