//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::formats::ResetMode;

/// Game directory names searched when none is configured.
pub const DEFAULT_GAME_DIRS: [&str; 2] = [".minecraft", "minecraft"];

/// General configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Explicit game directory (skips the search).
    #[serde(default)]
    pub game_dir: Option<PathBuf>,
    /// Directory names to search for, in order (empty = defaults).
    #[serde(default)]
    pub game_dirs: Vec<String>,
    /// Create missing target files instead of failing.
    #[serde(default = "default_true")]
    pub create_missing: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            game_dir: None,
            game_dirs: Vec::new(),
            create_missing: true,
        }
    }
}

/// Reset configuration settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResetConfig {
    /// Reset each target file once per run before applying options.
    #[serde(default)]
    pub enabled: bool,
    /// What an `options.txt` reset keeps.
    #[serde(default)]
    pub mode: ResetMode,
}

/// Exclude patterns configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExcludeConfig {
    /// Glob patterns matched against setting group names.
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Reset settings.
    #[serde(default)]
    pub reset: ResetConfig,
    /// Exclude patterns.
    #[serde(default)]
    pub exclude: ExcludeConfig,
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the config file path for the user's config directory.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("optsync").join("config.toml"))
    }

    /// Game directory names to search for, in order.
    pub fn game_dir_candidates(&self) -> Vec<String> {
        if self.general.game_dirs.is_empty() {
            DEFAULT_GAME_DIRS.iter().map(|s| s.to_string()).collect()
        } else {
            self.general.game_dirs.clone()
        }
    }

    /// Merge another config into this one (other takes precedence for set values).
    pub fn merge(&mut self, other: Config) {
        // General settings
        if other.general.game_dir.is_some() {
            self.general.game_dir = other.general.game_dir;
        }
        if !other.general.game_dirs.is_empty() {
            self.general.game_dirs = other.general.game_dirs;
        }
        self.general.create_missing = other.general.create_missing;

        // Reset settings
        self.reset = other.reset;

        // Exclude patterns - append rather than replace
        self.exclude.patterns.extend(other.exclude.patterns);
    }
}

fn default_true() -> bool {
    true
}
