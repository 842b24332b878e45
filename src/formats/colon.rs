//! `options.txt` style files: one `key:value` pair per line.

use super::options_map::{line_ending, OptionsMap, ParsedOptions};
use super::{MergeOutcome, ResetMode};
use crate::settings::OptionEntry;

/// Delimiter between key and value.
pub const DELIMITER: char = ':';

/// Prefix of key binding entries.
pub const KEY_BINDING_PREFIX: &str = "key_";

/// Prefix of the entries that record the file's data version.
///
/// The game refuses to load an `options.txt` without it, so a reset never
/// removes it.
pub const VERSION_PREFIX: &str = "version";

/// Parse colon-delimited content.
pub fn parse(content: &str) -> ParsedOptions {
    OptionsMap::parse(content, DELIMITER)
}

/// Strip everything a reset should clear.
pub fn reset_filter(mut options: OptionsMap, mode: ResetMode) -> OptionsMap {
    options.retain(|key, _| {
        key.starts_with(VERSION_PREFIX)
            || (mode == ResetMode::KeepKeyBindings && key.starts_with(KEY_BINDING_PREFIX))
    });
    options
}

/// Apply `options` to the current file content.
///
/// The current content is always parsed, because a reset filters it rather
/// than starting from nothing. The file's line ending is kept. Free-form
/// options have no single key and are skipped.
pub fn merge(current: &str, reset: bool, options: &[OptionEntry], mode: ResetMode) -> MergeOutcome {
    let parsed = parse(current);

    let mut merged = if reset {
        reset_filter(parsed.options, mode)
    } else {
        parsed.options
    };

    for (key, value) in options.iter().filter_map(|e| e.key().zip(e.value())) {
        merged.insert(key, value.to_text());
    }

    MergeOutcome {
        content: merged.serialize(DELIMITER, line_ending(current)),
        recovered: false,
        skipped_lines: parsed.skipped,
    }
}
