//! Custom error types for optsync.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for optsync.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// Settings file missing or invalid.
    pub const INVALID_SETTINGS: i32 = 2;
    /// Game directory not found.
    pub const NO_GAME_DIR: i32 = 3;
    /// A target configuration file could not be processed.
    pub const TARGET_FAILED: i32 = 4;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 5;
}

/// Main error type for optsync.
#[derive(Error, Debug)]
pub enum SyncError {
    /// No settings file was given on the command line.
    #[error("No settings file specified\n\nTip: Pass the path to a settings JSON file:\n  optsync path/to/settings.json")]
    NoSettingsFile,

    /// Settings file does not exist.
    #[error("Settings file not found: {path}")]
    SettingsNotFound { path: PathBuf },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file at {path}:\n  {message}")]
    InvalidSettings {
        path: PathBuf,
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    /// A `check_file` entry points outside the game directory.
    #[error("Setting group '{group}' targets '{check_file}', which is not a path inside the game directory")]
    UnsafeTargetPath { group: String, check_file: String },

    /// A free-form `option` object in a group that targets a text file.
    #[error("Setting group '{group}' targets '{check_file}', but has an option without \"key\" and \"value\"\n\nTip: Free-form option objects are only merged into JSON files.")]
    FreeFormOption { group: String, check_file: String },

    /// None of the game directory candidates exist.
    #[error("Game directory not found (looked for: {candidates})\n\nTip: Place optsync next to your .minecraft or minecraft folder, or pass --game-dir.")]
    GameDirNotFound { candidates: String },

    /// Game directory given explicitly but not usable.
    #[error("Game directory '{path}' does not exist or is not a directory")]
    InvalidGameDir { path: PathBuf },

    /// Target file is missing and creation is disabled.
    #[error("Target file {path} does not exist\n\nTip: Remove --no-create to create missing files automatically.")]
    TargetMissing { path: PathBuf },

    /// Invalid exclude pattern.
    #[error("Invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error with path context.
    #[error("Failed to {operation} '{path}': {source}")]
    IoWithContext {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SyncError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncError::NoSettingsFile => exit_code::INVALID_SETTINGS,
            SyncError::SettingsNotFound { .. } => exit_code::INVALID_SETTINGS,
            SyncError::InvalidSettings { .. } => exit_code::INVALID_SETTINGS,
            SyncError::UnsafeTargetPath { .. } => exit_code::INVALID_SETTINGS,
            SyncError::FreeFormOption { .. } => exit_code::INVALID_SETTINGS,
            SyncError::GameDirNotFound { .. } => exit_code::NO_GAME_DIR,
            SyncError::InvalidGameDir { .. } => exit_code::NO_GAME_DIR,
            SyncError::TargetMissing { .. } => exit_code::TARGET_FAILED,
            SyncError::InvalidPattern { .. } => exit_code::GENERAL_ERROR,
            SyncError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
            SyncError::IoWithContext { .. } => exit_code::TARGET_FAILED,
            SyncError::Io(_) => exit_code::GENERAL_ERROR,
        }
    }

    /// Wrap an IO error with the operation and path it failed on.
    pub fn io(operation: &str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::IoWithContext {
            operation: operation.to_string(),
            path: path.into(),
            source,
        }
    }

    /// Build an [`SyncError::InvalidSettings`] from a serde_json error.
    pub fn invalid_settings(path: impl Into<PathBuf>, err: &serde_json::Error) -> Self {
        let (line, column) = if err.line() > 0 {
            (Some(err.line()), Some(err.column()))
        } else {
            (None, None)
        };
        let message = match (line, column) {
            (Some(l), Some(c)) => format!("{} (line {}, column {})", strip_location(err), l, c),
            _ => err.to_string(),
        };
        SyncError::InvalidSettings {
            path: path.into(),
            message,
            line,
            column,
        }
    }
}

/// serde_json appends " at line X column Y" to its messages; drop it so the
/// location is only reported once.
fn strip_location(err: &serde_json::Error) -> String {
    let msg = err.to_string();
    match msg.rfind(" at line ") {
        Some(idx) => msg[..idx].to_string(),
        None => msg,
    }
}

/// Result type alias for optsync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
