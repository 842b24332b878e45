//! Ordered key/value mapping for line-oriented configuration files.

use std::collections::HashMap;

/// An ordered mapping of option keys to their encoded string values.
///
/// Insertion order is kept so files are written back in a stable, readable
/// order. Overwriting an existing key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

/// Result of parsing a delimited file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    /// The parsed options.
    pub options: OptionsMap,
    /// Non-empty lines that had no delimiter and were skipped.
    pub skipped: Vec<String>,
}

impl OptionsMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key<delimiter>value` lines.
    ///
    /// Surrounding whitespace of the whole content is trimmed first. Each
    /// line is split once on the first delimiter, so the value may contain
    /// further delimiters. Empty lines are ignored and lines without a
    /// delimiter are reported in [`ParsedOptions::skipped`]. Later duplicates
    /// of a key overwrite earlier ones.
    pub fn parse(content: &str, delimiter: char) -> ParsedOptions {
        let mut parsed = ParsedOptions::default();

        for line in content.trim().lines() {
            if line.is_empty() {
                continue;
            }
            match line.split_once(delimiter) {
                Some((key, value)) => {
                    parsed.options.insert(key, value);
                }
                None => parsed.skipped.push(line.to_string()),
            }
        }

        parsed
    }

    /// Serialize as `key<delimiter>value` lines joined by `line_ending`.
    ///
    /// No trailing line ending is written.
    pub fn serialize(&self, delimiter: char, line_ending: &str) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{k}{delimiter}{v}"))
            .collect::<Vec<_>>()
            .join(line_ending)
    }

    /// Insert or overwrite a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].1.as_str())
    }

    /// Check whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keep only the entries for which the predicate returns true.
    pub fn retain(&mut self, mut f: impl FnMut(&str, &str) -> bool) {
        self.entries.retain(|(k, v)| f(k, v));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, (k, _))| (k.clone(), i))
            .collect();
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The line ending `content` uses: `\r\n` if its first line ends with one,
/// otherwise `\n`.
pub fn line_ending(content: &str) -> &'static str {
    match content.find('\n') {
        Some(i) if content[..i].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OptionsMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OptionsMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
