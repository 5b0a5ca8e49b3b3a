//! JSON file-based session store.
//!
//! This module provides a simple, human-readable store implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename)
//! to prevent corruption when the plugin is torn down mid-write.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads the entire file into memory once
//! - **Write**: O(n) - serializes and writes the whole map
//! - **Best for**: a handful of small keys written on user input

use crate::domain::error::{Result, ZortalError};
use crate::session::backend::SessionStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// On-disk container format.
///
/// Wraps the key-value map in a versioned object so the format can grow
/// without breaking older session files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionData {
    /// Version of the store format for future migrations.
    version: u32,

    /// All stored values, keyed by session key name.
    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl Default for SessionData {
    fn default() -> Self {
        Self {
            version: 1,
            values: BTreeMap::new(),
        }
    }
}

/// JSON file session store.
///
/// Keeps the full map in memory and persists it on every write. A corrupt
/// or unreadable file falls back to an empty store rather than failing the
/// plugin: losing navigational state is preferable to losing the UI.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "values": {
///     "page": "3",
///     "search-text": "Rick"
///   }
/// }
/// ```
pub struct JsonSessionStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: SessionData,

    /// Tracks whether data has been modified since the last save.
    dirty: bool,
}

impl JsonSessionStore {
    /// Creates or opens a JSON session store.
    ///
    /// If the file exists and parses, its values are loaded. A missing,
    /// unreadable, or corrupt file yields an empty store. Parent directories
    /// are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error only if the parent directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use zortal::session::JsonSessionStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonSessionStore::new(PathBuf::from("/tmp/session.json"))?;
    /// # Ok::<(), zortal::domain::ZortalError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening session store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "session file unreadable, starting empty");
                SessionData::default()
            })
        } else {
            tracing::debug!("no session file yet, starting empty");
            SessionData::default()
        };

        tracing::debug!(value_count = data.values.len(), "session store opened");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Loads store data from a JSON file.
    fn load_from_file(path: &PathBuf) -> Result<SessionData> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| ZortalError::Session(format!("failed to parse session file: {e}")))
    }

    /// Saves store data to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target
    /// path, so the file is never left half-written.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| ZortalError::Session(format!("failed to serialize session data: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "session state saved");
        Ok(())
    }
}

impl SessionStore for JsonSessionStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let _span =
            tracing::debug_span!("session_write", key = %key, value_len = value.len()).entered();

        let previous = self
            .data
            .values
            .insert(key.to_string(), value.to_string());

        if previous.as_deref() == Some(value) {
            tracing::trace!("value unchanged, skipping save");
            return Ok(());
        }

        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonSessionStore {
    /// Ensures dirty data is flushed on drop.
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save session state on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_path() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        (dir, path)
    }

    #[test]
    fn write_is_visible_to_subsequent_read() {
        let (_dir, path) = temp_store_path();
        let mut store = JsonSessionStore::new(path).unwrap();

        store.write("page", "3").unwrap();
        assert_eq!(store.read("page").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn values_survive_reopen() {
        let (_dir, path) = temp_store_path();

        {
            let mut store = JsonSessionStore::new(path.clone()).unwrap();
            store.write("page", "5").unwrap();
            store.write("search-text", "Morty").unwrap();
        }

        let reopened = JsonSessionStore::new(path).unwrap();
        assert_eq!(reopened.read("page").unwrap().as_deref(), Some("5"));
        assert_eq!(
            reopened.read("search-text").unwrap().as_deref(),
            Some("Morty")
        );
    }

    #[test]
    fn unknown_key_reads_as_none() {
        let (_dir, path) = temp_store_path();
        let store = JsonSessionStore::new(path).unwrap();
        assert_eq!(store.read("page").unwrap(), None);
    }

    #[test]
    fn corrupt_file_falls_back_to_empty() {
        let (_dir, path) = temp_store_path();
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonSessionStore::new(path).unwrap();
        assert_eq!(store.read("page").unwrap(), None);
    }

    #[test]
    fn rewrites_overwrite_in_place() {
        let (_dir, path) = temp_store_path();
        let mut store = JsonSessionStore::new(path).unwrap();

        store.write("page", "1").unwrap();
        store.write("page", "2").unwrap();
        assert_eq!(store.read("page").unwrap().as_deref(), Some("2"));
    }
}
