//! Durable key-value storage for user preferences.

use crate::error::StoreError;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// The key under which the active language is persisted.
pub const LANGUAGE_KEY: &str = "language";

/// A durable string key-value store, such as browser local storage.
pub trait LanguageStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: LanguageStore + ?Sized> LanguageStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// An in-memory store. Values do not outlive the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates a store pre-populated with one entry.
    pub fn with(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }
}

impl LanguageStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A store backed by a flat TOML file of string values.
///
/// A missing file reads as empty. An unreadable or malformed file also reads
/// as empty (the problem is logged) and is replaced on the next write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> toml::Table {
        let content = match fs_err::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return toml::Table::new(),
            Err(error) => {
                tracing::warn!("Failed to read preference file: {}", error);
                return toml::Table::new();
            },
        };

        match content.parse::<toml::Table>() {
            Ok(table) => table,
            Err(error) => {
                tracing::warn!(
                    "Ignoring malformed preference file {:?}: {}",
                    self.path,
                    error
                );
                toml::Table::new()
            },
        }
    }
}

impl LanguageStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load()
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut table = self.load();
        table.insert(key.to_string(), toml::Value::String(value.to_string()));
        let content = toml::to_string(&table)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs_err::create_dir_all(parent)?;
        }

        // Write-then-rename keeps the file whole.
        let temp_path = self.path.with_extension("toml.tmp");
        fs_err::write(&temp_path, content)?;
        fs_err::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get(LANGUAGE_KEY), None);
        store.set(LANGUAGE_KEY, "sw").unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("sw"));
    }

    #[test]
    fn file_store_missing_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("prefs.toml"));
        assert_eq!(store.get(LANGUAGE_KEY), None);
    }

    #[test]
    fn file_store_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("prefs.toml");
        let mut store = FileStore::new(&path);

        store.set(LANGUAGE_KEY, "rw").unwrap();

        assert!(path.is_file());
        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("rw"));
    }

    #[test]
    fn file_store_keeps_unrelated_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.toml");
        std::fs::write(&path, "theme = \"dark\"\n").unwrap();

        let mut store = FileStore::new(&path);
        store.set(LANGUAGE_KEY, "fr").unwrap();

        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("fr"));
    }

    #[test]
    fn file_store_treats_malformed_file_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.toml");
        std::fs::write(&path, "language = [not toml").unwrap();

        let mut store = FileStore::new(&path);
        assert_eq!(store.get(LANGUAGE_KEY), None);

        store.set(LANGUAGE_KEY, "lg").unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("lg"));
    }

    #[test]
    fn file_store_ignores_non_string_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.toml");
        std::fs::write(&path, "language = 42\n").unwrap();

        assert_eq!(FileStore::new(&path).get(LANGUAGE_KEY), None);
    }
}
