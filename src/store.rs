//! Durable key-value storage for engine state.
//!
//! The engine persists three small string values (see `constants`). Storage
//! is assumed synchronous and local; a failed read is treated as "value
//! absent" and a failed write is logged by the caller and retried on the
//! next mutation. Gameplay never blocks on storage.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// String-keyed durable storage.
///
/// Mirrors the browser's persisted local storage: small string values,
/// synchronous access, best-effort durability.
pub trait KvStore {
    /// Read a value. Any failure reads as absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Errors are reported but never fatal to gameplay.
    fn set(&mut self, key: &str, value: &str) -> Result<(), String>;

    /// Delete a value (used when a session ends and its state is cleared).
    fn remove(&mut self, key: &str) -> Result<(), String>;
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// HashMap-backed store with no durability. Suits tests and session-only
/// play where nothing should outlive the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), String> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// JSON FILE STORE
// =============================================================================

/// On-disk file format: a flat key map.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    entries: HashMap<String, String>,
}

/// Write-through store persisted as a JSON file.
///
/// Opening a missing or unreadable file yields an empty store - persisted
/// values that cannot be read are simply absent. Every `set`/`remove`
/// rewrites the whole file; the payload is three short strings, so this
/// stays cheap.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading whatever state is readable.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str::<StoreFile>(&text).ok())
            .map(|file| file.entries)
            .unwrap_or_default();
        Self { path, entries }
    }

    fn flush(&self) -> Result<(), String> {
        let file = StoreFile {
            entries: self.entries.clone(),
        };
        let text = serde_json::to_string_pretty(&file)
            .map_err(|e| format!("Failed to encode {}: {}", self.path.display(), e))?;
        std::fs::write(&self.path, text)
            .map_err(|e| format!("Failed to write {}: {}", self.path.display(), e))
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), String> {
        if self.entries.remove(key).is_some() {
            self.flush()
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("stamina_store_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("currentStamina"), None);

        store.set("currentStamina", "250").unwrap();
        assert_eq!(store.get("currentStamina"), Some("250".to_string()));

        store.remove("currentStamina").unwrap();
        assert_eq!(store.get("currentStamina"), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let path = temp_path("reopen");
        {
            let mut store = JsonFileStore::open(&path);
            store.set("maxStamina", "300").unwrap();
            store.set("currentStamina", "12").unwrap();
        }

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("maxStamina"), Some("300".to_string()));
        assert_eq!(store.get("currentStamina"), Some("12".to_string()));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_corrupt_file_reads_as_empty() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("currentStamina"), None);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_remove_clears_persisted_value() {
        let path = temp_path("remove");
        {
            let mut store = JsonFileStore::open(&path);
            store.set("lastStaminaRegen", "1700000000000").unwrap();
            store.remove("lastStaminaRegen").unwrap();
        }

        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("lastStaminaRegen"), None);

        let _ = std::fs::remove_file(&path);
    }
}
