//! Settings specification module for optsync.
//!
//! Handles loading the JSON settings file that lists which options to apply
//! to which configuration files.

mod load;
mod types;

pub use load::{load_settings, parse_settings};
pub use types::{compile_patterns, KeyValue, OptionEntry, SettingGroup, SettingOption, Settings, Value};
