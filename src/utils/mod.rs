//! Utility module for optsync.
//!
//! Path helpers for locating the game directory and config files.

mod paths;

pub use paths::{config_dir, ensure_file, find_game_dir, global_config_file, local_config_file};
