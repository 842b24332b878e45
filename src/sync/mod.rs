//! Sync module for optsync.
//!
//! Walks the settings specification and updates each target file, resetting
//! every file at most once per run.

mod apply;
mod ledger;

pub use apply::{sync_settings, GroupAction, GroupOutcome, SyncOptions, SyncReport};
pub use ledger::ResetLedger;
