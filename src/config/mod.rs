//! Configuration module for optsync.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI arguments (highest priority)
//! - `.optsyncrc.toml` in the working directory
//! - User-level `~/.config/optsync/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config, PROJECT_CONFIG_FILE};
pub use types::{Config, ExcludeConfig, GeneralConfig, ResetConfig, DEFAULT_GAME_DIRS};
