//! optsync - game options sync
//!
//! Brings the configuration files of a game installation in line with a
//! declarative settings file. Each setting group names a target file and the
//! options it should contain; files can optionally be reset to a clean
//! baseline first.
//!
//! # Supported formats
//!
//! - `options.txt` - `key:value` lines
//! - `*.json` - JSON objects, values keep their type
//! - `*.properties` - `key=value` lines
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Configuration file loading and types
//! - [`error`] - Error types and result helpers
//! - [`formats`] - Per-format parsers and mergers
//! - [`settings`] - Settings file loading and types
//! - [`sync`] - Applying settings to the game directory
//! - [`utils`] - Path utilities
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use optsync::settings::load_settings;
//! use optsync::sync::{sync_settings, SyncOptions};
//!
//! let settings = load_settings(Path::new("settings.json")).expect("Failed to load settings");
//! let options = SyncOptions { reset: true, ..Default::default() };
//!
//! let report = sync_settings(Path::new(".minecraft"), &settings, &options, &mut std::io::stdout())
//!     .expect("Failed to apply settings");
//! println!("{} groups applied", report.applied());
//! ```

/// CLI argument definitions.
pub mod cli;

/// Configuration system for loading and merging settings.
pub mod config;

/// Error types and result helpers.
pub mod error;

/// Configuration file formats.
pub mod formats;

/// Settings specification parsing.
pub mod settings;

/// Applying settings to target files.
pub mod sync;

/// Path utilities.
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use error::{Result, SyncError};
pub use formats::{FileFormat, ResetMode};
pub use settings::{SettingGroup, Settings, Value};
pub use sync::{sync_settings, SyncOptions, SyncReport};
