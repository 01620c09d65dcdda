//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait for the structured per-user store: one
//! logical table keyed by username, one [`UserRecord`] per key. The trait is kept
//! to the four operations the launcher actually needs.

use crate::domain::error::Result;
use crate::storage::models::UserRecord;

/// Abstraction over the structured per-user store.
///
/// Every method other than [`open`](Storage::open) opens the store lazily, so
/// callers never need to call `open` themselves. Operations are issued serially;
/// `&mut self` keeps at most one in flight per store.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
///
/// # Examples
///
/// ```no_run
/// use launchdeck::storage::{JsonStorage, Storage, UserRecord};
///
/// let mut storage = JsonStorage::new("/tmp/launchdeck/records.json");
/// storage.put(&UserRecord::new("alice"))?;
/// let record = storage.get("alice")?;
/// assert!(record.is_some());
/// # Ok::<(), launchdeck::LaunchdeckError>(())
/// ```
pub trait Storage: Send {
    /// Initializes the store, creating the table on first use.
    ///
    /// Idempotent: calling it again on an open store does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be created or read.
    fn open(&mut self) -> Result<()>;

    /// Upserts a record by username, replacing any prior record entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The prior record is left intact.
    fn put(&mut self, record: &UserRecord) -> Result<()>;

    /// Retrieves the record for a username.
    ///
    /// Returns `Ok(None)` when no record exists.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store itself fails.
    fn get(&mut self, username: &str) -> Result<Option<UserRecord>>;

    /// Lists every stored username. Ordering is backend-defined.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to open.
    fn list_keys(&mut self) -> Result<Vec<String>>;
}
