//! Flat key-value session store.
//!
//! Every value is JSON text stored under a hand-built key, the same layout a
//! browser's local storage would hold:
//!
//! | key                | value                                  |
//! |--------------------|----------------------------------------|
//! | `currentUser`      | username of the last logged-in user    |
//! | `users`            | JSON array of `{username, password}`   |
//! | `<username>_games` | JSON array of launch entries           |
//! | `<username>_files` | JSON array of media entries            |
//!
//! Each mutation rewrites the backing file atomically. Collection reads fail
//! soft: a missing or unparsable value reads as an empty list. The credential
//! registry is read strictly, since an empty read there would be written back.

use crate::domain::error::{LaunchdeckError, Result};
use crate::storage::file::{read_json, write_json_atomic};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Key of the session marker naming the logged-in user.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Key of the serialized credential registry.
pub const USERS_KEY: &str = "users";

/// Key of a user's flat launch-entry list.
#[must_use]
pub fn games_key(username: &str) -> String {
    format!("{username}_games")
}

/// Key of a user's flat media-entry list.
#[must_use]
pub fn files_key(username: &str) -> String {
    format!("{username}_files")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// File-backed flat key-value store.
///
/// # Examples
///
/// ```no_run
/// use launchdeck::storage::SessionStore;
///
/// let mut store = SessionStore::open("/tmp/launchdeck/session.json")?;
/// store.write_scalar("currentUser", "alice")?;
/// assert_eq!(store.read_scalar("currentUser").as_deref(), Some("alice"));
/// # Ok::<(), launchdeck::LaunchdeckError>(())
/// ```
#[derive(Debug)]
pub struct SessionStore {
    file_path: PathBuf,
    data: StoreData,
}

impl SessionStore {
    /// Opens the store, loading existing entries if the file exists.
    ///
    /// A missing file is an empty store; nothing is written until the first
    /// mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        let _span = tracing::debug_span!("kv_open", path = ?file_path).entered();

        let data = read_json::<StoreData>(&file_path)?.unwrap_or_default();
        tracing::debug!(keys = data.entries.len(), "session store loaded");

        Ok(Self { file_path, data })
    }

    /// Reads and decodes a list, returning an empty list when the key is absent
    /// or its value does not decode.
    pub fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.data.entries.get(key) else {
            return Vec::new();
        };

        serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!(key = %key, error = %e, "discarding undecodable list value");
            Vec::new()
        })
    }

    /// Reads and decodes a list that must not be silently dropped.
    ///
    /// An absent key is an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchdeckError::StorageUnavailable`] if the stored value does
    /// not decode.
    pub fn read_list_strict<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(raw) = self.data.entries.get(key) else {
            return Ok(Vec::new());
        };

        serde_json::from_str(raw).map_err(|e| {
            tracing::error!(key = %key, error = %e, "stored list is corrupt");
            LaunchdeckError::StorageUnavailable(format!("failed to decode {key}: {e}"))
        })
    }

    /// Encodes and stores a list, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the file write fails.
    pub fn write_list<T: Serialize>(&mut self, key: &str, value: &[T]) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|e| {
            LaunchdeckError::StorageUnavailable(format!("failed to encode {key}: {e}"))
        })?;
        self.set(key, raw)
    }

    #[must_use]
    pub fn read_scalar(&self, key: &str) -> Option<String> {
        self.data.entries.get(key).cloned()
    }

    /// Stores a raw value, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if the file write fails.
    pub fn write_scalar(&mut self, key: &str, value: &str) -> Result<()> {
        self.set(key, value.to_string())
    }

    /// Removes a key. Removing an absent key is a no-op and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file write fails.
    pub fn delete_scalar(&mut self, key: &str) -> Result<()> {
        if !self.data.entries.contains_key(key) {
            return Ok(());
        }

        let mut next = self.data.clone();
        next.entries.remove(key);
        self.commit(next)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.data.entries.contains_key(key)
    }

    fn set(&mut self, key: &str, raw: String) -> Result<()> {
        let mut next = self.data.clone();
        next.entries.insert(key.to_string(), raw);
        self.commit(next)
    }

    fn commit(&mut self, next: StoreData) -> Result<()> {
        write_json_atomic(&self.file_path, &next)?;
        self.data = next;
        tracing::trace!(keys = self.data.entries.len(), "session store saved");
        Ok(())
    }
}
