//! Configuration file formats.
//!
//! Each supported format has a parser and a merger that applies a group's
//! options to the file's current content:
//!
//! - [`colon`] - `options.txt` (`key:value` lines)
//! - [`json`] - `*.json` files
//! - [`properties`] - `*.properties` files (`key=value` lines)

pub mod colon;
pub mod json;
mod options_map;
pub mod properties;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use options_map::{OptionsMap, ParsedOptions};

use crate::settings::OptionEntry;

/// File name that selects the colon format.
pub const OPTIONS_TXT: &str = "options.txt";

/// What a reset of an `options.txt` file keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResetMode {
    /// Keep key bindings and the version marker.
    #[default]
    KeepKeyBindings,
    /// Keep only the version marker.
    VersionOnly,
}

impl fmt::Display for ResetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResetMode::KeepKeyBindings => write!(f, "keep-key-bindings"),
            ResetMode::VersionOnly => write!(f, "version-only"),
        }
    }
}

/// The result of merging options into a file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The new file content.
    pub content: String,
    /// The current content was unreadable and was replaced.
    pub recovered: bool,
    /// Lines of the current content that could not be parsed and were dropped.
    pub skipped_lines: Vec<String>,
}

/// A supported configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `options.txt`: `key:value` lines.
    Colon,
    /// JSON object.
    Json,
    /// `key=value` lines.
    Properties,
}

impl FileFormat {
    /// Detect the format of a target file from its name.
    ///
    /// A file named exactly `options.txt` is [`FileFormat::Colon`]; otherwise
    /// the `.json` and `.properties` suffixes select their formats. Anything
    /// else is unsupported.
    ///
    /// # Examples
    ///
    /// ```
    /// use optsync::formats::FileFormat;
    ///
    /// assert_eq!(FileFormat::detect("options.txt"), Some(FileFormat::Colon));
    /// assert_eq!(FileFormat::detect("config/iris.properties"), Some(FileFormat::Properties));
    /// assert_eq!(FileFormat::detect("optionsof.txt"), None);
    /// ```
    pub fn detect(check_file: &str) -> Option<Self> {
        let file_name = Path::new(check_file)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(check_file);

        if file_name == OPTIONS_TXT {
            Some(FileFormat::Colon)
        } else if file_name.ends_with(".json") {
            Some(FileFormat::Json)
        } else if file_name.ends_with(".properties") {
            Some(FileFormat::Properties)
        } else {
            None
        }
    }

    /// Get the format name.
    pub fn name(&self) -> &'static str {
        match self {
            FileFormat::Colon => "options",
            FileFormat::Json => "json",
            FileFormat::Properties => "properties",
        }
    }

    /// Merge `options` into `current` content.
    ///
    /// `reset_mode` only affects the colon format.
    pub fn merge(
        &self,
        current: &str,
        reset: bool,
        options: &[OptionEntry],
        reset_mode: ResetMode,
    ) -> MergeOutcome {
        match self {
            FileFormat::Colon => colon::merge(current, reset, options, reset_mode),
            FileFormat::Json => json::merge(current, reset, options),
            FileFormat::Properties => properties::merge(current, reset, options),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
