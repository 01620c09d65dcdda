//! JSON file-based structured store.
//!
//! All user records live in one human-readable JSON file, keyed by username.
//! Writes go through a temporary file and an atomic rename.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) after the file is loaded once on open
//! - **Write**: O(n), the whole table is serialized on every `put`
//! - **Best for**: a handful of local users, infrequent writes

use crate::domain::error::Result;
use crate::storage::backend::Storage;
use crate::storage::file::{read_json, write_json_atomic};
use crate::storage::models::UserRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Current table format version.
const TABLE_VERSION: u32 = 1;

/// On-disk table format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TableData {
    /// Version of the table format for future migrations.
    version: u32,

    /// Records keyed by username.
    #[serde(default)]
    users: BTreeMap<String, UserRecord>,
}

impl Default for TableData {
    fn default() -> Self {
        Self {
            version: TABLE_VERSION,
            users: BTreeMap::new(),
        }
    }
}

/// JSON file structured store.
///
/// Constructing the store touches nothing on disk; the file is loaded (or
/// created) by the first operation.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "users": {
///     "alice": {
///       "username": "alice",
///       "games": [
///         { "id": "…", "name": "Steam", "url": "steam://", "kind": "link", "isEmbeddedFile": false }
///       ],
///       "files": []
///     }
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonStorage {
    file_path: PathBuf,

    /// Loaded table, `None` until opened.
    data: Option<TableData>,
}

impl JsonStorage {
    /// Creates an unopened store backed by `file_path`.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            data: None,
        }
    }

    #[must_use]
    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }

    fn table(&mut self) -> Result<&mut TableData> {
        if self.data.is_none() {
            self.open()?;
        }
        Ok(self.data.get_or_insert_with(TableData::default))
    }
}

impl Storage for JsonStorage {
    fn open(&mut self) -> Result<()> {
        if self.data.is_some() {
            tracing::trace!("storage already open");
            return Ok(());
        }

        let _span = tracing::debug_span!("json_open", path = ?self.file_path).entered();

        let data = if let Some(data) = read_json::<TableData>(&self.file_path)? {
            tracing::debug!(
                version = data.version,
                users = data.users.len(),
                "loaded existing table"
            );
            data
        } else {
            tracing::debug!("creating new empty table");
            let data = TableData::default();
            write_json_atomic(&self.file_path, &data)?;
            data
        };

        self.data = Some(data);
        Ok(())
    }

    fn put(&mut self, record: &UserRecord) -> Result<()> {
        let _span = tracing::debug_span!("json_put",
            username = %record.username,
            games = record.games.len(),
            files = record.files.len()
        ).entered();

        let path = self.file_path.clone();
        let table = self.table()?;

        let mut next = table.clone();
        next.users.insert(record.username.clone(), record.clone());
        write_json_atomic(&path, &next)?;
        *table = next;

        tracing::debug!("record stored");
        Ok(())
    }

    fn get(&mut self, username: &str) -> Result<Option<UserRecord>> {
        let _span = tracing::debug_span!("json_get", username = %username).entered();

        let record = self.table()?.users.get(username).cloned();

        tracing::debug!(found = record.is_some(), "record lookup complete");
        Ok(record)
    }

    fn list_keys(&mut self) -> Result<Vec<String>> {
        let _span = tracing::debug_span!("json_list_keys").entered();

        let keys: Vec<String> = self.table()?.users.keys().cloned().collect();

        tracing::debug!(count = keys.len(), "listed users");
        Ok(keys)
    }
}
