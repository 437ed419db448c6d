//! Key-value preference persistence
//!
//! A tiny string store used to remember user choices across runs.
//! The file backend keeps everything in one TOML table:
//!
//! ```toml
//! search = "React"
//! ```

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A string key-value store
pub trait PreferenceStore: Send {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preference store backed by a TOML file
///
/// The file is read once when the store is opened and rewritten on every
/// `set`.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store at `path`
    ///
    /// A missing file yields an empty store. A file that cannot be parsed
    /// is logged and treated as empty; it is overwritten on the next `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::load_from_path(&path) {
            Ok(values) => {
                log::info!("Loaded {} preference(s) from {:?}", values.len(), path);
                values
            }
            Err(e) if !path.exists() => {
                log::debug!("No preferences file at {:?}: {}", path, e);
                BTreeMap::new()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable preferences file {:?}: {:#}", path, e);
                BTreeMap::new()
            }
        };

        Self { path, values }
    }

    /// Open the store at the default location in the config directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(crate::paths::preferences_path()?))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_path(path: &Path) -> Result<BTreeMap<String, String>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse preferences file: {:?}", path))
    }

    fn save(&self) -> Result<()> {
        let content =
            toml::to_string_pretty(&self.values).context("Failed to serialize preferences")?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences file: {:?}", self.path))?;

        log::debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// In-memory preference store
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
