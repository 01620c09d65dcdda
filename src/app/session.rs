//! Explicit session context.
//!
//! A [`Session`] is what a successful login hands back: the username plus the
//! user's collections held in memory. It is passed into every mutating call on
//! the [`Launcher`](super::Launcher) instead of living in a global, so several
//! sessions can coexist in one process. Dropping or logging out a session clears
//! the in-memory state; durable data is untouched.

use crate::domain::{LaunchEntry, MediaEntry, MediaKind};
use crate::storage::UserRecord;

/// A logged-in user's context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
    games: Vec<LaunchEntry>,
    files: Vec<MediaEntry>,
}

impl Session {
    pub(crate) fn from_record(record: UserRecord) -> Self {
        Self {
            username: record.username,
            games: record.games,
            files: record.files,
        }
    }

    pub(crate) fn to_record(&self) -> UserRecord {
        UserRecord {
            username: self.username.clone(),
            games: self.games.clone(),
            files: self.files.clone(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn games(&self) -> &[LaunchEntry] {
        &self.games
    }

    #[must_use]
    pub fn files(&self) -> &[MediaEntry] {
        &self.files
    }

    /// Media entries of one kind, in their original relative order.
    #[must_use]
    pub fn media_by_kind(&self, kind: MediaKind) -> Vec<&MediaEntry> {
        self.files.iter().filter(|f| f.kind == kind).collect()
    }

    /// Whether any entry in either collection carries `id`.
    #[must_use]
    pub fn contains_entry(&self, id: &str) -> bool {
        self.games.iter().any(|g| g.id == id) || self.files.iter().any(|f| f.id == id)
    }

    pub(crate) fn replace(&mut self, record: UserRecord) {
        debug_assert_eq!(record.username, self.username);
        self.games = record.games;
        self.files = record.files;
    }
}
