//! optsync - game options sync
//!
//! Entry point for the optsync CLI application.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};

use optsync::cli::Cli;
use optsync::config::{generate_example_config, load_config, Config};
use optsync::error::{exit_code, SyncError};
use optsync::formats::FileFormat;
use optsync::settings::{compile_patterns, load_settings, Settings};
use optsync::sync::{sync_settings, SyncOptions};
use optsync::utils::{find_game_dir, global_config_file, local_config_file};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            if let Some(sync_err) = err.downcast_ref::<SyncError>() {
                eprintln!("Error: {sync_err}");
                return ExitCode::from(sync_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    if cli.print_config {
        print!("{}", generate_example_config());
        return Ok(exit_code::SUCCESS);
    }

    if cli.debug {
        print_debug_header();
        eprintln!("Debug: CLI arguments = {cli:#?}");
    }

    let working_dir = cli.working_dir();

    let config = if cli.no_config {
        Config::default()
    } else {
        load_config(cli.config.as_deref(), &working_dir)?
    };

    if cli.debug {
        print_debug_paths(&working_dir);
        eprintln!("Debug: Config = {config:#?}");
    }

    let settings_path = cli.settings.clone().ok_or(SyncError::NoSettingsFile)?;
    println!("Settings file: {}", settings_path.display());
    let settings = load_settings(&settings_path)?;

    // Combine config and CLI exclude patterns
    let mut exclude_patterns = config.exclude.patterns.clone();
    exclude_patterns.extend(cli.exclude.clone());
    let patterns = compile_patterns(&exclude_patterns)?;
    let settings = settings.without_matching(&patterns);

    if cli.debug {
        eprintln!("Debug: {} setting groups after exclusions", settings.len());
    }

    if cli.list {
        return list_groups(&settings);
    }

    let explicit_game_dir = cli.game_dir.clone().or(config.general.game_dir.clone());
    let game_dir = find_game_dir(
        explicit_game_dir.as_deref(),
        &config.game_dir_candidates(),
        &search_roots(&working_dir, &settings_path),
    )?;

    if cli.debug {
        eprintln!("Debug: Game directory = {}", game_dir.display());
    }

    let options = SyncOptions {
        reset: cli.reset || config.reset.enabled,
        reset_mode: cli.reset_mode_override().unwrap_or(config.reset.mode),
        create_missing: !cli.no_create && config.general.create_missing,
        dry_run: cli.dry_run,
        debug: cli.debug,
    };

    let mut stdout = io::stdout().lock();
    let report = sync_settings(&game_dir, &settings, &options, &mut stdout)
        .with_context(|| format!("Failed to apply {}", settings_path.display()))?;

    if cli.debug {
        eprintln!(
            "Debug: {} groups applied, {} skipped",
            report.applied(),
            report.skipped().count()
        );
    }

    Ok(exit_code::SUCCESS)
}

/// Directories searched for the game directory: the working directory, then
/// the directory holding the settings file.
fn search_roots(working_dir: &Path, settings_path: &Path) -> Vec<PathBuf> {
    let mut roots = vec![working_dir.to_path_buf()];
    let settings_dir = settings_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| working_dir.join(p));
    if let Some(dir) = settings_dir {
        if dir != working_dir {
            roots.push(dir);
        }
    }
    roots
}

/// List setting groups in a nice format (no files touched).
fn list_groups(settings: &Settings) -> Result<i32> {
    let use_colors = io::stdout().is_terminal();

    if use_colors {
        println!("\x1b[1;36mSetting groups:\x1b[0m");
    } else {
        println!("Setting groups:");
    }
    println!();

    let max_name_len = settings
        .iter()
        .map(|g| g.name.chars().count())
        .max()
        .unwrap_or(0)
        .min(30);

    for group in settings.iter() {
        let format = FileFormat::detect(&group.check_file)
            .map(|f| f.name())
            .unwrap_or("unsupported");
        let name = truncate_string(&group.name, 30);

        if use_colors {
            print!("  \x1b[1;32m{:width$}\x1b[0m", name, width = max_name_len);
            print!("  {}", group.check_file);
            print!("  \x1b[2m({}, {} options)\x1b[0m", format, group.options.len());
        } else {
            print!("  {:width$}", name, width = max_name_len);
            print!("  {}", group.check_file);
            print!("  ({}, {} options)", format, group.options.len());
        }
        println!();
    }

    println!();
    if use_colors {
        println!("\x1b[2m{} groups found\x1b[0m", settings.len());
    } else {
        println!("{} groups found", settings.len());
    }

    Ok(exit_code::SUCCESS)
}

/// Truncate a string to a maximum length, adding ellipsis if needed.
fn truncate_string(s: &str, max_len: usize) -> String {
    if max_len < 4 {
        return s.chars().take(max_len).collect();
    }

    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

// ==================== Debug Functions ====================

/// Print debug header with version info.
fn print_debug_header() {
    eprintln!("=== optsync debug mode ===");
    eprintln!("Version: {}", env!("CARGO_PKG_VERSION"));
    eprintln!();
}

/// Print debug information about config file locations.
fn print_debug_paths(working_dir: &Path) {
    eprintln!("Debug: File locations:");

    if let Some(cfg) = global_config_file() {
        let exists = cfg.exists();
        eprintln!("  Global config: {} (exists: {})", cfg.display(), exists);
    } else {
        eprintln!("  Global config: <not available>");
    }

    if let Some(cfg) = local_config_file(working_dir) {
        eprintln!("  Local config: {} (exists: true)", cfg.display());
    } else {
        eprintln!(
            "  Local config: {}/.optsyncrc.toml (exists: false)",
            working_dir.display()
        );
    }

    eprintln!();
}
