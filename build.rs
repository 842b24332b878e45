//! Build script for optsync.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "optsync")]
#[command(
    author,
    version,
    about = "Sync game configuration files against a settings file"
)]
#[command(
    long_about = "optsync applies a JSON settings file to the configuration files of a game \
    installation (options.txt, *.json and *.properties).\n\n\
    Each setting group names a target file and the options it should contain. With --reset, \
    every target file is first cleared to a clean baseline (options.txt keeps its version and \
    key bindings) once per run."
)]
struct Cli {
    /// Path to the settings file (JSON)
    #[arg(value_name = "SETTINGS")]
    settings: Option<PathBuf>,

    /// Game directory (default: search for .minecraft or minecraft)
    #[arg(short, long, value_name = "DIR")]
    game_dir: Option<PathBuf>,

    /// Reset each target file once before applying options
    #[arg(short, long)]
    reset: bool,

    /// What a reset of options.txt keeps
    #[arg(long, value_name = "MODE", value_enum)]
    reset_mode: Option<ResetMode>,

    /// List setting groups without touching any file
    #[arg(short, long)]
    list: bool,

    /// Skip setting groups whose name matches pattern (can be repeated)
    #[arg(short, long, value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Print resulting file contents instead of writing them
    #[arg(short, long)]
    dry_run: bool,

    /// Fail instead of creating missing target files
    #[arg(long)]
    no_create: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Print a documented example config file and exit
    #[arg(long)]
    print_config: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ResetMode {
    KeepKeyBindings,
    VersionOnly,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("OPTSYNC_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    man.render(&mut buffer)
        .expect("Failed to generate man page");

    let man_path = out_dir.join("optsync.1");
    fs::write(&man_path, buffer).expect("Failed to write man page");

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("optsync.1"));
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}
