//! Configuration file loading and parsing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::types::Config;
use crate::error::SyncError;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = ".optsyncrc.toml";

/// Load configuration from the specified path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).map_err(|e| SyncError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    Ok(config)
}

/// Load configuration with proper priority and merging.
///
/// Searches for config files in order of priority (lowest to highest):
/// 1. `~/.config/optsync/config.toml` (user-level, lowest priority)
/// 2. `.optsyncrc.toml` in the working directory
/// 3. CLI argument `--config <path>` (highest priority)
///
/// Missing config files are handled gracefully (defaults are used).
///
/// # Errors
///
/// Returns an error if a specified config file (via CLI) cannot be read or parsed.
/// Broken default config files only produce a warning.
pub fn load_config(cli_config_path: Option<&Path>, working_dir: &Path) -> Result<Config> {
    let mut config = Config::default();

    // Load user-level config (lowest priority)
    if let Some(user_config_path) = Config::user_config_path() {
        if user_config_path.exists() {
            match load_config_from_path(&user_config_path) {
                Ok(user_config) => config.merge(user_config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to load user config at {}: {}",
                        user_config_path.display(),
                        e
                    );
                }
            }
        }
    }

    // Load project-level config
    let project_config_path = working_dir.join(PROJECT_CONFIG_FILE);
    if project_config_path.exists() {
        match load_config_from_path(&project_config_path) {
            Ok(project_config) => config.merge(project_config),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load project config at {}: {}",
                    project_config_path.display(),
                    e
                );
            }
        }
    }

    // Load CLI-specified config (highest priority)
    if let Some(cli_path) = cli_config_path {
        let cli_config = load_config_from_path(cli_path)?;
        config.merge(cli_config);
    }

    Ok(config)
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r#"# optsync Configuration File
# Place this file at ~/.config/optsync/config.toml for global settings
# or .optsyncrc.toml in the directory you run optsync from

[general]
# Game directory to update (skips the search below)
# game_dir = "/home/me/.minecraft"

# Directory names searched next to the working directory and the settings file
game_dirs = [".minecraft", "minecraft"]

# Create target files that do not exist yet
create_missing = true

[reset]
# Reset each target file once per run before applying options
enabled = false

# What a reset of options.txt keeps: "keep-key-bindings" or "version-only"
mode = "keep-key-bindings"

[exclude]
# Setting groups to skip, matched against the group name (glob syntax)
patterns = [
    # "Server*",
]
"#
    .to_string()
}
