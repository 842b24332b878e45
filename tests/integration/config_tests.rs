//! Integration tests for configuration loading and merging.

use std::fs;

use optsync::config::{load_config, Config, ExcludeConfig, ResetConfig};
use optsync::formats::ResetMode;
use tempfile::TempDir;

// ==================== Config Defaults ====================

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.general.create_missing);
    assert!(!config.reset.enabled);
    assert!(config.exclude.patterns.is_empty());
    assert_eq!(config.game_dir_candidates(), vec![".minecraft", "minecraft"]);
}

// ==================== Config Merging ====================

#[test]
fn test_config_merge() {
    let mut base = Config::default();
    base.exclude.patterns = vec!["base".to_string()];

    let overlay = Config {
        reset: ResetConfig {
            enabled: true,
            mode: ResetMode::VersionOnly,
        },
        exclude: ExcludeConfig {
            patterns: vec!["overlay".to_string()],
        },
        ..Default::default()
    };

    base.merge(overlay);

    assert!(base.reset.enabled);
    assert_eq!(base.reset.mode, ResetMode::VersionOnly);
    assert!(base.exclude.patterns.contains(&"base".to_string()));
    assert!(base.exclude.patterns.contains(&"overlay".to_string()));
}

// ==================== Loading ====================

#[test]
fn test_load_full_project_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".optsyncrc.toml"),
        r#"
[general]
game_dir = "/srv/minecraft"
create_missing = false

[reset]
enabled = true
mode = "version-only"

[exclude]
patterns = ["Server*"]
"#,
    )
    .unwrap();

    let config = load_config(None, temp.path()).unwrap();

    assert_eq!(
        config.general.game_dir,
        Some(std::path::PathBuf::from("/srv/minecraft"))
    );
    assert!(!config.general.create_missing);
    assert!(config.reset.enabled);
    assert_eq!(config.reset.mode, ResetMode::VersionOnly);
    assert!(config.exclude.patterns.contains(&"Server*".to_string()));
}

#[test]
fn test_unknown_reset_mode_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cli.toml");
    fs::write(&path, "[reset]\nmode = \"everything\"\n").unwrap();

    assert!(load_config(Some(&path), temp.path()).is_err());
}
