//! Key/value persistence for user preferences.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;

/// Fixed, namespaced keys: one per preference dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    FontSize,
    Theme,
    Contrast,
    Spacing,
    /// Deprecated alias of `Spacing`. Read for compatibility, never written or removed.
    Dyslexia,
}

impl StorageKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::FontSize => "edacessivel-font-size",
            StorageKey::Theme => "edacessivel-theme",
            StorageKey::Contrast => "edacessivel-high-contrast",
            StorageKey::Spacing => "edacessivel-spacing",
            StorageKey::Dyslexia => "edacessivel-dyslexia",
        }
    }
}

/// Boolean flags are stored as the literal `"true"`; absence means false.
pub const FLAG_ON: &str = "true";

/// Session-spanning preference storage. Absent keys are not errors.
pub trait PreferenceStore {
    fn get(&self, key: StorageKey) -> Option<String>;
    fn set(&mut self, key: StorageKey, value: &str);
    fn remove(&mut self, key: StorageKey);

    fn flag(&self, key: StorageKey) -> bool {
        self.get(key).as_deref() == Some(FLAG_ON)
    }
}

/// In-process store, used by tests and embedding hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with raw entries, e.g. values written by an earlier session.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (StorageKey, &'a str)>) -> Self {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.as_str().to_string(), v.to_string()))
            .collect();
        Self { values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.values.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: StorageKey, value: &str) {
        self.values.insert(key.as_str().to_string(), value.to_string());
    }

    fn remove(&mut self, key: StorageKey) {
        self.values.remove(key.as_str());
    }
}

/// Durable store backed by a flat JSON object on disk.
///
/// Every mutation is written through immediately. A failed write is logged and
/// the in-memory value still applies for the rest of the session.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing or corrupt file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse preferences {}: {}. Starting empty.", path.display(), e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current contents to disk
    pub fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to save preferences to {}: {}", self.path.display(), e);
        }
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.values.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: StorageKey, value: &str) {
        self.values.insert(key.as_str().to_string(), value.to_string());
        self.persist();
    }

    fn remove(&mut self, key: StorageKey) {
        if self.values.remove(key.as_str()).is_some() {
            self.persist();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(StorageKey::Theme), None);

        store.set(StorageKey::Theme, "dark");
        assert_eq!(store.get(StorageKey::Theme).as_deref(), Some("dark"));

        store.remove(StorageKey::Theme);
        assert_eq!(store.get(StorageKey::Theme), None);

        // Removing an absent key is fine
        store.remove(StorageKey::Spacing);
        assert!(store.is_empty());
    }

    #[test]
    fn test_flag_requires_literal_true() {
        let store = MemoryStore::with_entries([
            (StorageKey::Contrast, "true"),
            (StorageKey::Spacing, "yes"),
        ]);
        assert!(store.flag(StorageKey::Contrast));
        assert!(!store.flag(StorageKey::Spacing));
        assert!(!store.flag(StorageKey::Dyslexia));
    }

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(StorageKey::FontSize.as_str(), "edacessivel-font-size");
        assert_eq!(StorageKey::Contrast.as_str(), "edacessivel-high-contrast");
        assert_eq!(StorageKey::Dyslexia.as_str(), "edacessivel-dyslexia");
    }

    #[test]
    fn test_json_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("preferences.json");

        let mut store = JsonFileStore::open(&path);
        store.set(StorageKey::FontSize, "120");
        store.set(StorageKey::Spacing, "true");
        store.remove(StorageKey::Spacing);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get(StorageKey::FontSize).as_deref(), Some("120"));
        assert_eq!(reopened.get(StorageKey::Spacing), None);
    }

    #[test]
    fn test_json_store_reads_raw_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"edacessivel-dyslexia": "true", "unrelated": "x"}"#).unwrap();

        let store = JsonFileStore::open(&path);
        assert!(store.flag(StorageKey::Dyslexia));
    }

    #[test]
    fn test_json_store_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "[1, 2").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get(StorageKey::Theme), None);
        assert_eq!(store.path(), path.as_path());
    }
}
