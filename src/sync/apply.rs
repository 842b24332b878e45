//! Applying a settings specification to the game directory.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use super::ledger::ResetLedger;
use crate::error::{Result, SyncError};
use crate::formats::{FileFormat, ResetMode};
use crate::settings::{SettingGroup, Settings};
use crate::utils::ensure_file;

/// Options controlling a sync run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Reset each target file once before applying options.
    pub reset: bool,
    /// What an `options.txt` reset keeps.
    pub reset_mode: ResetMode,
    /// Create missing target files instead of failing.
    pub create_missing: bool,
    /// Print the resulting contents instead of writing them.
    pub dry_run: bool,
    /// Print debug output to stderr.
    pub debug: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            reset: false,
            reset_mode: ResetMode::default(),
            create_missing: true,
            dry_run: false,
            debug: false,
        }
    }
}

/// What happened to a setting group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupAction {
    /// The target file was rewritten.
    Written,
    /// The new content was printed only.
    DryRun,
    /// The target file type is not supported; nothing was done.
    Skipped,
}

/// Outcome of applying one setting group.
#[derive(Debug, Clone)]
pub struct GroupOutcome {
    /// Group name.
    pub name: String,
    /// Resolved target path.
    pub path: PathBuf,
    /// Detected format, if supported.
    pub format: Option<FileFormat>,
    /// What was done.
    pub action: GroupAction,
    /// The file was reset before applying options.
    pub reset: bool,
    /// The file did not exist and was created (or would be, in a dry run).
    pub created: bool,
    /// Unreadable content was replaced.
    pub recovered: bool,
    /// The resulting content (absent for skipped groups).
    pub content: Option<String>,
}

/// Result of a whole sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Outcomes in group order.
    pub outcomes: Vec<GroupOutcome>,
}

impl SyncReport {
    /// Number of groups whose file was written or dry-run.
    pub fn applied(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.action != GroupAction::Skipped)
            .count()
    }

    /// Groups that were skipped.
    pub fn skipped(&self) -> impl Iterator<Item = &GroupOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.action == GroupAction::Skipped)
    }
}

/// Apply every group of `settings` to files under `game_dir`, in order.
///
/// Notices are written to `out`. A failure on one group aborts the run;
/// files written by earlier groups stay written.
///
/// # Errors
///
/// Returns an error if a target file is missing and creation is disabled, or
/// if reading or writing a target file fails.
pub fn sync_settings<W: Write>(
    game_dir: &Path,
    settings: &Settings,
    options: &SyncOptions,
    out: &mut W,
) -> Result<SyncReport> {
    let mut ledger = ResetLedger::new();
    // Contents produced during a dry run, so later groups see them
    let mut pending: HashMap<PathBuf, String> = HashMap::new();
    let mut report = SyncReport::default();

    for group in settings.iter() {
        let outcome = apply_group(game_dir, group, options, &mut ledger, &mut pending, out)?;
        report.outcomes.push(outcome);
    }

    if options.dry_run {
        writeln!(out, "Dry run: no files were changed")?;
    } else {
        writeln!(out, "All settings updated")?;
    }

    Ok(report)
}

fn apply_group<W: Write>(
    game_dir: &Path,
    group: &SettingGroup,
    options: &SyncOptions,
    ledger: &mut ResetLedger,
    pending: &mut HashMap<PathBuf, String>,
    out: &mut W,
) -> Result<GroupOutcome> {
    group.validate()?;
    // "./options.txt" and "options.txt" must share a ledger entry
    let path: PathBuf = Path::new(&group.check_file)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .fold(game_dir.to_path_buf(), |acc, c| acc.join(c));

    // Detected before the existence check so unsupported targets are never created
    let Some(format) = FileFormat::detect(&group.check_file) else {
        eprintln!(
            "Warning: Skipping '{}': unsupported file type '{}'",
            group.name, group.check_file
        );
        return Ok(GroupOutcome {
            name: group.name.clone(),
            path,
            format: None,
            action: GroupAction::Skipped,
            reset: false,
            created: false,
            recovered: false,
            content: None,
        });
    };

    if options.debug {
        eprintln!(
            "Debug: Group '{}' -> {} ({} format, {} options)",
            group.name,
            path.display(),
            format,
            group.options.len()
        );
    }

    let (current, created) = read_current(&path, options, pending, out)?;

    let reset = ledger.claim_reset(&path, options.reset);
    let outcome = format.merge(&current, reset, &group.options, options.reset_mode);

    if reset {
        writeln!(out, "Reset {}", path.display())?;
    }
    if outcome.recovered {
        writeln!(
            out,
            "Failed to read {}, starting from an empty file",
            path.display()
        )?;
    }
    if options.debug {
        for line in &outcome.skipped_lines {
            eprintln!("Debug: Dropped unparsable line in {}: {:?}", path.display(), line);
        }
    }

    let action = if options.dry_run {
        writeln!(out, "--- {} (dry run) ---", path.display())?;
        writeln!(out, "{}", outcome.content)?;
        pending.insert(path.clone(), outcome.content.clone());
        GroupAction::DryRun
    } else {
        fs::write(&path, &outcome.content).map_err(|e| SyncError::io("write", &path, e))?;
        GroupAction::Written
    };

    writeln!(out, "Updated {} from '{}'", path.display(), group.name)?;

    Ok(GroupOutcome {
        name: group.name.clone(),
        path,
        format: Some(format),
        action,
        reset,
        created,
        recovered: outcome.recovered,
        content: Some(outcome.content),
    })
}

/// Read the current content of a target file, creating it if allowed.
///
/// Returns the content and whether the file was (or, in a dry run, would be)
/// created.
fn read_current<W: Write>(
    path: &Path,
    options: &SyncOptions,
    pending: &HashMap<PathBuf, String>,
    out: &mut W,
) -> Result<(String, bool)> {
    if let Some(content) = pending.get(path) {
        return Ok((content.clone(), false));
    }

    if !path.exists() {
        if !options.create_missing {
            return Err(SyncError::TargetMissing {
                path: path.to_path_buf(),
            });
        }
        writeln!(out, "{} does not exist", path.display())?;
        if options.dry_run {
            return Ok((String::new(), true));
        }
        ensure_file(path)?;
        writeln!(out, "Created {}", path.display())?;
        let content = fs::read_to_string(path).map_err(|e| SyncError::io("read", path, e))?;
        return Ok((content, true));
    }

    let content = fs::read_to_string(path).map_err(|e| SyncError::io("read", path, e))?;
    Ok((content, false))
}
