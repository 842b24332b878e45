//! Library-level sync scenarios.

use optsync::formats::{colon, json, properties, ResetMode};
use optsync::settings::{parse_settings, OptionEntry, SettingGroup, Settings};
use optsync::sync::{sync_settings, GroupAction, SyncOptions};

use crate::integration::fixtures::{create_workspace, multi_format_settings};

fn load(content: &str) -> Settings {
    parse_settings(content, std::path::Path::new("settings.json")).unwrap()
}

// ==================== Reset Ledger ====================

#[test]
fn test_second_group_keeps_first_group_keys() {
    let ws = create_workspace(&multi_format_settings());
    ws.write("options.txt", "version:3465\nkey_key.jump:key.keyboard.space\ngamma:1.0");

    let settings = load(&multi_format_settings());
    let options = SyncOptions {
        reset: true,
        ..Default::default()
    };
    let report = sync_settings(&ws.game_dir, &settings, &options, &mut Vec::<u8>::new()).unwrap();

    let content = ws.read("options.txt");
    assert_eq!(
        content,
        "version:3465\nkey_key.jump:key.keyboard.space\nfov:90\nresourcePacks:[\"vanilla\",\"file/recording.zip\"]\nchatVisibility:2"
    );

    let resets: Vec<bool> = report.outcomes.iter().map(|o| o.reset).collect();
    assert_eq!(resets, vec![true, false, true, true]);
}

#[test]
fn test_runs_are_independent() {
    let ws = create_workspace(&multi_format_settings());
    let settings = load(&multi_format_settings());
    let options = SyncOptions {
        reset: true,
        ..Default::default()
    };

    sync_settings(&ws.game_dir, &settings, &options, &mut Vec::<u8>::new()).unwrap();
    let first = ws.read("options.txt");

    // A second run resets again and converges to the same content
    let report = sync_settings(&ws.game_dir, &settings, &options, &mut Vec::<u8>::new()).unwrap();
    assert!(report.outcomes[0].reset);
    assert_eq!(ws.read("options.txt"), first);
}

// ==================== JSON ====================

#[test]
fn test_json_round_trip_through_disk() {
    let ws = create_workspace("{\"settings\": []}");
    ws.write(
        "config/mod.json",
        "{\n  \"list\": [1, 2],\n  \"nested\": {\"a\": \"b\"},\n  \"flag\": true\n}",
    );

    let mut settings = Settings::new();
    settings.add(SettingGroup::new("Mod", "config/mod.json").with_option("flag", false));

    sync_settings(&ws.game_dir, &settings, &SyncOptions::default(), &mut Vec::<u8>::new())
        .unwrap();

    let map = json::parse(&ws.read("config/mod.json")).unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["list", "nested", "flag"]);
    assert_eq!(map["list"], serde_json::json!([1, 2]));
    assert_eq!(map["nested"], serde_json::json!({"a": "b"}));
    assert_eq!(map["flag"], serde_json::json!(false));
}

#[test]
fn test_json_corrupt_equals_reset() {
    let options = vec![
        OptionEntry::new("a", true),
        OptionEntry::new("b", vec!["x", "y"]),
    ];
    let corrupt = json::merge("<<<", false, &options);
    let reset = json::merge("{\"old\": 1}", true, &options);
    assert_eq!(corrupt.content, reset.content);
}

// ==================== Text formats ====================

#[test]
fn test_colon_reset_filter_exact() {
    let parsed = colon::parse("version:1\nkey_a:x\nfoo:1\nkey_b:y\nbar:2");
    let filtered = colon::reset_filter(parsed.options, ResetMode::KeepKeyBindings);
    assert_eq!(filtered.keys(), vec!["version", "key_a", "key_b"]);
}

#[test]
fn test_properties_stringification() {
    let options = vec![
        OptionEntry::new("pvp", false),
        OptionEntry::new("motd", "hello world"),
        OptionEntry::new("view-distance", 8),
    ];
    let outcome = properties::merge("", false, &options);
    assert_eq!(outcome.content, "pvp=false\nmotd=hello world\nview-distance=8");
}

// ==================== Dry run ====================

#[test]
fn test_dry_run_reports_but_does_not_write() {
    let ws = create_workspace(&multi_format_settings());
    let settings = load(&multi_format_settings());
    let options = SyncOptions {
        dry_run: true,
        ..Default::default()
    };

    let mut out = Vec::new();
    let report = sync_settings(&ws.game_dir, &settings, &options, &mut out).unwrap();

    assert!(report
        .outcomes
        .iter()
        .all(|o| o.action == GroupAction::DryRun));
    assert!(!ws.game_file("options.txt").exists());
    assert!(!ws.game_file("config").exists());

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("server.properties (dry run)"));
}
