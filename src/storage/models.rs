//! Storage record models for the persistence layer.

use serde::{Deserialize, Serialize};

use crate::domain::{LaunchEntry, MediaEntry};

/// One user's durable collections.
///
/// This is the unit of storage in the structured store: writes always replace
/// the whole record, never individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Primary key.
    pub username: String,

    #[serde(default)]
    pub games: Vec<LaunchEntry>,

    #[serde(default)]
    pub files: Vec<MediaEntry>,
}

impl UserRecord {
    /// Creates a record with empty collections.
    ///
    /// # Examples
    ///
    /// ```
    /// use launchdeck::storage::UserRecord;
    ///
    /// let record = UserRecord::new("alice");
    /// assert_eq!(record.username, "alice");
    /// assert!(record.games.is_empty());
    /// assert!(record.files.is_empty());
    /// ```
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            games: Vec::new(),
            files: Vec::new(),
        }
    }
}
