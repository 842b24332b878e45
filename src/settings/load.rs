//! Settings file loading.

use std::fs;
use std::io;
use std::path::Path;

use super::types::Settings;
use crate::error::{Result, SyncError};

/// Load and validate a settings specification from a JSON file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist ([`SyncError::SettingsNotFound`])
/// - The file cannot be read
/// - The JSON is malformed or has the wrong shape ([`SyncError::InvalidSettings`])
/// - A group targets a path outside the game directory
/// - A group targeting a text file has a free-form option
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SyncError::SettingsNotFound {
            path: path.to_path_buf(),
        },
        _ => SyncError::io("read", path, e),
    })?;

    parse_settings(&content, path)
}

/// Parse settings from JSON content.
///
/// `origin` is only used for error messages.
///
/// # Errors
///
/// Returns [`SyncError::InvalidSettings`] if the content is not a valid
/// settings document, or the first error from
/// [`SettingGroup::validate`](super::SettingGroup::validate).
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use optsync::settings::parse_settings;
///
/// let json = r#"{"settings": [{"name": "Video", "check_file": "options.txt",
///     "options": [{"option": {"key": "fov", "value": 90}}]}]}"#;
/// let settings = parse_settings(json, Path::new("settings.json")).unwrap();
/// assert_eq!(settings.len(), 1);
/// ```
pub fn parse_settings(content: &str, origin: &Path) -> Result<Settings> {
    let settings: Settings = serde_json::from_str(content)
        .map_err(|e| SyncError::invalid_settings(origin, &e))?;

    settings.validate()?;

    Ok(settings)
}
