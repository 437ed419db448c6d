//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/hacker-stories/`, `~/.cache/hacker-stories/`
//! - macOS: `~/Library/Application Support/hacker-stories/`, `~/Library/Caches/hacker-stories/`
//! - Windows: `%APPDATA%\hacker-stories\`, `%LOCALAPPDATA%\hacker-stories\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "hacker-stories";

/// Get the application config directory
/// Returns ~/.config/hacker-stories/ on Linux, ~/Library/Application Support/hacker-stories/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory
/// Returns ~/.cache/hacker-stories/ on Linux, ~/Library/Caches/hacker-stories/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the preferences file
pub fn preferences_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("preferences.toml"))
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_exists() {
        let dir = config_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_cache_dir_exists() {
        let dir = cache_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_file_paths() {
        assert!(preferences_path().unwrap().ends_with("preferences.toml"));
        assert!(app_config_path().unwrap().ends_with("config.toml"));
    }
}
