//! Integration tests for optsync.
//!
//! - `fixtures` - Test helpers for creating temporary game directories
//! - `cli_tests` - CLI interface tests
//! - `sync_tests` - Library-level sync scenarios
//! - `config_tests` - Configuration loading and merging tests
//! - `snapshot_tests` - Output snapshot tests using insta

pub mod config_tests;
pub mod snapshot_tests;
pub mod sync_tests;
