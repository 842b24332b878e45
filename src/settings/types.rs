//! Type definitions for the settings specification.

use std::fmt;
use std::path::{Component, Path};

use glob::Pattern;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::SyncError;
use crate::formats::FileFormat;

/// The value of a single option.
///
/// Deserialized untagged, so `true`, `90`, `"fancy"` and `["a", "b"]` in the
/// settings file map to `Bool`, `Number`, `Str` and `List` respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(serde_json::Number),
    Str(String),
    List(Vec<String>),
}

impl Value {
    /// Encode the value for a line-oriented text file.
    ///
    /// Booleans become `true`/`false`, lists become a bracketed list of
    /// double-quoted items (`["a","b"]`), everything else is written as-is.
    pub fn to_text(&self) -> String {
        match self {
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Str(s) => s.clone(),
            Value::List(items) => {
                let quoted: Vec<String> = items.iter().map(|item| format!("\"{item}\"")).collect();
                format!("[{}]", quoted.join(","))
            }
        }
    }

    /// Convert the value to its native JSON form.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(|item| serde_json::Value::String(item.clone()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::List(items.into_iter().map(String::from).collect())
    }
}

/// A key and the value it should be set to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyValue {
    pub key: String,
    pub value: Value,
}

/// The payload of an `option` object.
///
/// `{"key": k, "value": v}` sets one key. Any other object is kept as-is and
/// its pairs are merged straight into JSON targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingOption {
    KeyValue(KeyValue),
    Raw(Map<String, JsonValue>),
}

/// One entry of a group's `options` list.
///
/// The settings file wraps every option in an `option` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub option: SettingOption,
}

impl OptionEntry {
    /// Create an entry from a key and value.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            option: SettingOption::KeyValue(KeyValue {
                key: key.into(),
                value: value.into(),
            }),
        }
    }

    /// Create a free-form entry whose pairs are merged as-is.
    pub fn raw(pairs: Map<String, JsonValue>) -> Self {
        Self {
            option: SettingOption::Raw(pairs),
        }
    }

    /// The option key, if this is a key/value entry.
    pub fn key(&self) -> Option<&str> {
        match &self.option {
            SettingOption::KeyValue(kv) => Some(&kv.key),
            SettingOption::Raw(_) => None,
        }
    }

    /// The option value, if this is a key/value entry.
    pub fn value(&self) -> Option<&Value> {
        match &self.option {
            SettingOption::KeyValue(kv) => Some(&kv.value),
            SettingOption::Raw(_) => None,
        }
    }

    /// Check if this is a free-form entry.
    pub fn is_raw(&self) -> bool {
        matches!(self.option, SettingOption::Raw(_))
    }

    /// The pairs this entry writes into a JSON object, in native JSON types.
    pub fn json_pairs(&self) -> Vec<(String, JsonValue)> {
        match &self.option {
            SettingOption::KeyValue(kv) => vec![(kv.key.clone(), kv.value.to_json())],
            SettingOption::Raw(pairs) => pairs
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

/// A named set of options applied to one target file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingGroup {
    /// Display name.
    pub name: String,
    /// Target file, relative to the game directory.
    pub check_file: String,
    /// Options to apply, in order.
    #[serde(default)]
    pub options: Vec<OptionEntry>,
}

impl SettingGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>, check_file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            check_file: check_file.into(),
            options: Vec::new(),
        }
    }

    /// Builder-style helper to append an option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.push(OptionEntry::new(key, value));
        self
    }

    /// Check that `check_file` is a relative path that stays inside the
    /// game directory.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::UnsafeTargetPath`] for empty, absolute, or
    /// parent-escaping paths, and [`SyncError::FreeFormOption`] when a text
    /// target has an option without `key` and `value`.
    pub fn validate(&self) -> Result<(), SyncError> {
        if !is_contained_path(&self.check_file) {
            return Err(SyncError::UnsafeTargetPath {
                group: self.name.clone(),
                check_file: self.check_file.clone(),
            });
        }

        let text_target = matches!(
            FileFormat::detect(&self.check_file),
            Some(FileFormat::Colon | FileFormat::Properties)
        );
        if text_target && self.options.iter().any(OptionEntry::is_raw) {
            return Err(SyncError::FreeFormOption {
                group: self.name.clone(),
                check_file: self.check_file.clone(),
            });
        }

        Ok(())
    }
}

fn is_contained_path(check_file: &str) -> bool {
    if check_file.trim().is_empty() {
        return false;
    }

    let mut has_file = false;
    for component in Path::new(check_file).components() {
        match component {
            Component::Normal(_) => has_file = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    has_file
}

/// The full settings specification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Setting groups, applied in order.
    pub settings: Vec<SettingGroup>,
}

impl Settings {
    /// Create an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group.
    pub fn add(&mut self, group: SettingGroup) {
        self.settings.push(group);
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Check if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Iterate over the groups in order.
    pub fn iter(&self) -> impl Iterator<Item = &SettingGroup> {
        self.settings.iter()
    }

    /// Validate every group.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`SettingGroup::validate`].
    pub fn validate(&self) -> Result<(), SyncError> {
        self.settings.iter().try_for_each(SettingGroup::validate)
    }

    /// Return a copy without the groups whose name matches any of the patterns.
    pub fn without_matching(&self, patterns: &[Pattern]) -> Self {
        if patterns.is_empty() {
            return self.clone();
        }

        Self {
            settings: self
                .settings
                .iter()
                .filter(|g| !patterns.iter().any(|p| p.matches(&g.name)))
                .cloned()
                .collect(),
        }
    }
}

/// Compile glob patterns used to exclude groups by name.
///
/// # Errors
///
/// Returns [`SyncError::InvalidPattern`] for the first pattern that fails to
/// compile.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>, SyncError> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| SyncError::InvalidPattern {
                pattern: p.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}
