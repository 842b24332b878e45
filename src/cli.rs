//! CLI argument definitions for optsync.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use optsync::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Settings file: {:?}", cli.settings);
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};

use crate::formats::ResetMode;

/// Sync game configuration files against a settings file.
#[derive(Parser, Debug)]
#[command(name = "optsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the settings file (JSON)
    #[arg(value_name = "SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Game directory (default: search for .minecraft or minecraft)
    #[arg(short, long, value_name = "DIR")]
    pub game_dir: Option<PathBuf>,

    /// Reset each target file once before applying options
    #[arg(short, long)]
    pub reset: bool,

    /// What a reset of options.txt keeps
    #[arg(long, value_name = "MODE", value_enum)]
    pub reset_mode: Option<CliResetMode>,

    /// List setting groups without touching any file
    #[arg(short, long)]
    pub list: bool,

    /// Skip setting groups whose name matches pattern (can be repeated)
    #[arg(short, long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Print resulting file contents instead of writing them
    #[arg(short, long)]
    pub dry_run: bool,

    /// Fail instead of creating missing target files
    #[arg(long)]
    pub no_create: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    pub no_config: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Print a documented example config file and exit
    #[arg(long)]
    pub print_config: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

/// Reset mode for CLI parsing.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliResetMode {
    /// Keep key bindings and the version marker.
    KeepKeyBindings,
    /// Keep only the version marker.
    VersionOnly,
}

impl From<CliResetMode> for ResetMode {
    fn from(mode: CliResetMode) -> Self {
        match mode {
            CliResetMode::KeepKeyBindings => ResetMode::KeepKeyBindings,
            CliResetMode::VersionOnly => ResetMode::VersionOnly,
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    /// Get the reset mode override.
    pub fn reset_mode_override(&self) -> Option<ResetMode> {
        self.reset_mode.map(Into::into)
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "optsync", &mut std::io::stdout());
    }
}
