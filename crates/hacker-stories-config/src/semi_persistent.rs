//! A value mirrored in memory and written through to a preference store

use crate::preferences::PreferenceStore;
use anyhow::Result;

/// A string value that survives restarts
///
/// The value is read from the store once, on `load`. Afterwards the
/// in-memory mirror is the source of truth and every `set` writes it
/// through to the store.
#[derive(Debug)]
pub struct SemiPersistentState<S: PreferenceStore> {
    store: S,
    key: String,
    value: String,
}

impl<S: PreferenceStore> SemiPersistentState<S> {
    /// Read `key` from `store`, falling back to `default` when the stored
    /// value is absent or empty
    pub fn load(store: S, key: impl Into<String>, default: impl Into<String>) -> Self {
        let key = key.into();
        let value = store
            .get(&key)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default.into());

        log::debug!("Restored preference {:?} = {:?}", key, value);
        Self { store, key, value }
    }

    /// Current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Key this value is stored under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Update the value and write it through to the store
    ///
    /// The in-memory value is updated even if the write fails.
    pub fn set(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if value == self.value {
            return Ok(());
        }
        self.value = value;
        self.store.set(&self.key, &self.value)
    }

    /// Write the current value to the store, even if it is unchanged
    ///
    /// Called once after `load`, so a default that replaced an absent or
    /// empty entry is stored as well.
    pub fn persist(&mut self) -> Result<()> {
        self.store.set(&self.key, &self.value)
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryPreferenceStore;

    #[test]
    fn test_falls_back_to_default() {
        let state = SemiPersistentState::load(MemoryPreferenceStore::new(), "search", "React");
        assert_eq!(state.value(), "React");
    }

    #[test]
    fn test_empty_value_falls_back_to_default() {
        let store = MemoryPreferenceStore::with_entry("search", "");
        let state = SemiPersistentState::load(store, "search", "React");
        assert_eq!(state.value(), "React");
    }

    #[test]
    fn test_restores_stored_value() {
        let store = MemoryPreferenceStore::with_entry("search", "Redux");
        let state = SemiPersistentState::load(store, "search", "React");
        assert_eq!(state.value(), "Redux");
    }

    #[test]
    fn test_set_writes_through() {
        let mut state = SemiPersistentState::load(MemoryPreferenceStore::new(), "search", "React");
        state.set("Rust").unwrap();
        assert_eq!(state.value(), "Rust");
        assert_eq!(state.store().get("search").as_deref(), Some("Rust"));
    }

    #[test]
    fn test_persist_stores_fallback_default() {
        let store = MemoryPreferenceStore::with_entry("search", "");
        let mut state = SemiPersistentState::load(store, "search", "React");
        assert_eq!(state.store().get("search").as_deref(), Some(""));

        state.persist().unwrap();
        assert_eq!(state.store().get("search").as_deref(), Some("React"));
    }

    #[test]
    fn test_set_empty_value_is_stored() {
        let mut state = SemiPersistentState::load(MemoryPreferenceStore::new(), "search", "React");
        state.set("").unwrap();
        assert_eq!(state.value(), "");
        assert_eq!(state.store().get("search").as_deref(), Some(""));
    }
}
