//! Configuration and persisted preferences for hacker-stories
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Key-value preference persistence (the remembered search term)

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod preferences;
pub mod semi_persistent;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir, preferences_path};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use semi_persistent::SemiPersistentState;

/// Preference key under which the last search term is stored
pub const SEARCH_TERM_KEY: &str = "search";
