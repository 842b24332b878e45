//! Snapshot tests using insta.
//!
//! These tests capture the exact text written for each format and the
//! non-interactive list output.

use assert_cmd::cargo::cargo_bin_cmd;

use optsync::formats::{FileFormat, ResetMode};
use optsync::settings::OptionEntry;

use crate::integration::fixtures::{create_workspace_without_game_dir, multi_format_settings};

fn sample_options() -> Vec<OptionEntry> {
    vec![
        OptionEntry::new("fov", 90),
        OptionEntry::new("fullscreen", true),
        OptionEntry::new("lang", "ja_jp"),
        OptionEntry::new("resourcePacks", vec!["vanilla", "file/hd.zip"]),
    ]
}

// ==================== Format Output Snapshots ====================

#[test]
fn test_snapshot_options_txt_reset() {
    let current = "version:3465\nkey_key.attack:key.mouse.left\nfov:0.0\nrenderDistance:12";
    let outcome = FileFormat::Colon.merge(current, true, &sample_options(), ResetMode::default());

    insta::assert_snapshot!(outcome.content, @r###"
version:3465
key_key.attack:key.mouse.left
fov:90
fullscreen:true
lang:ja_jp
resourcePacks:["vanilla","file/hd.zip"]
"###);
}

#[test]
fn test_snapshot_json_merge() {
    let current = "{\"renderDistance\": 12, \"fov\": 70}";
    let outcome = FileFormat::Json.merge(current, false, &sample_options(), ResetMode::default());

    insta::assert_snapshot!(outcome.content, @r###"
{
  "renderDistance": 12,
  "fov": 90,
  "fullscreen": true,
  "lang": "ja_jp",
  "resourcePacks": [
    "vanilla",
    "file/hd.zip"
  ]
}
"###);
}

#[test]
fn test_snapshot_properties_merge() {
    let current = "#comment\nmotd=A Minecraft Server\nfov=70";
    let outcome =
        FileFormat::Properties.merge(current, false, &sample_options(), ResetMode::default());

    insta::assert_snapshot!(outcome.content, @r###"
motd=A Minecraft Server
fov=90
fullscreen=true
lang=ja_jp
resourcePacks=["vanilla","file/hd.zip"]
"###);
}

// ==================== List Output Snapshots ====================

#[test]
fn test_snapshot_list_output() {
    let ws = create_workspace_without_game_dir(&multi_format_settings());

    let output = cargo_bin_cmd!("optsync")
        .args(["--no-config", "--list", "settings.json"])
        .current_dir(ws.path())
        .output()
        .expect("Failed to run optsync");

    let stdout = String::from_utf8_lossy(&output.stdout);

    insta::assert_snapshot!(stdout.trim_end(), @r###"
Settings file: settings.json
Setting groups:

  Video   options.txt  (options, 2 options)
  Chat    options.txt  (options, 1 options)
  Sodium  config/sodium-options.json  (json, 2 options)
  Server  server.properties  (properties, 2 options)

4 groups found
"###);
}
