//! Tracking of files already reset in the current run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Set of target files that have been reset during this run.
///
/// When several setting groups target the same file, only the first one may
/// reset it; the rest merge onto what the earlier groups wrote.
#[derive(Debug, Clone, Default)]
pub struct ResetLedger {
    reset: HashSet<PathBuf>,
}

impl ResetLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether the next update of `path` resets it.
    ///
    /// Returns `true` only if a reset was requested and the file has not been
    /// reset yet, and records the reset.
    pub fn claim_reset(&mut self, path: &Path, requested: bool) -> bool {
        requested && self.reset.insert(path.to_path_buf())
    }
}
