//! Path utilities.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::PROJECT_CONFIG_FILE;
use crate::error::{Result, SyncError};

/// Locate the game directory.
///
/// An explicit directory is used as-is after checking it exists. Otherwise
/// each search root is tried in order, and within a root each candidate name
/// in order; the first existing directory wins.
///
/// # Errors
///
/// Returns [`SyncError::InvalidGameDir`] if the explicit directory does not
/// exist, or [`SyncError::GameDirNotFound`] if no candidate exists.
pub fn find_game_dir(
    explicit: Option<&Path>,
    candidates: &[String],
    search_roots: &[PathBuf],
) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        if dir.is_dir() {
            return Ok(dir.to_path_buf());
        }
        return Err(SyncError::InvalidGameDir {
            path: dir.to_path_buf(),
        });
    }

    search_roots
        .iter()
        .flat_map(|root| candidates.iter().map(move |name| root.join(name)))
        .find(|dir| dir.is_dir())
        .ok_or_else(|| SyncError::GameDirNotFound {
            candidates: candidates.join(", "),
        })
}

/// Make sure a target file exists, creating it empty if needed.
///
/// Parent directories are created too. Returns `true` if the file was created.
///
/// # Errors
///
/// Returns an error if the file or its parent directories cannot be created.
pub fn ensure_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| SyncError::io("create directory", parent, e))?;
        }
    }
    fs::write(path, "").map_err(|e| SyncError::io("create", path, e))?;

    Ok(true)
}

/// Get the config directory for optsync.
///
/// Returns `~/.config/optsync` on Unix-like systems.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("optsync"))
}

/// Get the global config file path.
///
/// Returns `~/.config/optsync/config.toml`.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find the local config file in the given directory.
pub fn local_config_file(dir: &Path) -> Option<PathBuf> {
    let config_file = dir.join(PROJECT_CONFIG_FILE);
    if config_file.exists() {
        Some(config_file)
    } else {
        None
    }
}
