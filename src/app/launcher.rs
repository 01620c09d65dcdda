//! Login, logout and collection management over the two stores.
//!
//! The [`Launcher`] owns the flat [`SessionStore`] (credential registry and
//! current-user marker) and a structured [`Storage`] backend (one record per
//! user). Every mutation writes the owning user's whole record before the
//! in-memory session is updated, so a failed write leaves the session exactly as
//! it was.
//!
//! # Login
//!
//! 1. Blank username or password is a validation error.
//! 2. The whole registry is decoded and searched for an exact username match.
//!    A registry that does not decode is [`LaunchdeckError::StorageUnavailable`]
//!    and nothing is written.
//! 3. Known user, matching password: authenticated, collections loaded.
//! 4. Known user, wrong password: [`LaunchdeckError::InvalidCredential`], nothing
//!    written.
//! 5. Unknown user: a credential is appended to the registry and an empty record
//!    is stored. Registration on first login is intentional.

use crate::app::session::Session;
use crate::domain::error::{LaunchdeckError, Result};
use crate::domain::{Credential, LaunchDraft, LaunchEntry, MediaDraft, MediaEntry, PasswordPolicy};
use crate::storage::{
    files_key, games_key, SessionStore, Storage, UserRecord, CURRENT_USER_KEY, USERS_KEY,
};

/// How a successful login came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Existing credential matched.
    Authenticated,
    /// Username was unseen; a new credential was registered.
    Registered,
}

/// Entry point for the presentation layer.
pub struct Launcher<S: Storage> {
    accounts: SessionStore,
    records: S,
    policy: Box<dyn PasswordPolicy>,
}

impl<S: Storage> Launcher<S> {
    /// Wraps already-opened stores; `policy` seals newly registered passwords.
    pub fn new(accounts: SessionStore, records: S, policy: Box<dyn PasswordPolicy>) -> Self {
        Self {
            accounts,
            records,
            policy,
        }
    }

    /// Logs in, registering the username if it has never been seen.
    ///
    /// # Errors
    ///
    /// - [`LaunchdeckError::Validation`] if either field is blank
    /// - [`LaunchdeckError::InvalidCredential`] on a password mismatch
    /// - [`LaunchdeckError::StorageUnavailable`] if the registry is corrupt
    /// - storage errors from either store
    pub fn login(&mut self, username: &str, password: &str) -> Result<(Session, LoginOutcome)> {
        let _span = tracing::debug_span!("login", username = %username).entered();

        if username.trim().is_empty() || password.is_empty() {
            return Err(LaunchdeckError::Validation(
                "username and password are required".to_string(),
            ));
        }

        let mut registry: Vec<Credential> = self.accounts.read_list_strict(USERS_KEY)?;
        tracing::debug!(registered = registry.len(), "registry decoded");

        let outcome = match registry.iter().find(|c| c.username == username) {
            Some(existing) => {
                if !self.policy.verify(existing, password) {
                    tracing::debug!("password mismatch");
                    return Err(LaunchdeckError::InvalidCredential);
                }
                LoginOutcome::Authenticated
            }
            None => {
                registry.push(self.policy.seal(username, password));
                self.accounts.write_list(USERS_KEY, &registry)?;
                tracing::info!(username = %username, "registered new user");
                LoginOutcome::Registered
            }
        };

        let record = self.load_or_create(username)?;
        self.accounts.write_scalar(CURRENT_USER_KEY, username)?;

        tracing::debug!(
            ?outcome,
            games = record.games.len(),
            files = record.files.len(),
            "login complete"
        );
        Ok((Session::from_record(record), outcome))
    }

    /// Restores the session named by the current-user marker, if any.
    ///
    /// A marker naming a user missing from the registry is cleared.
    ///
    /// # Errors
    ///
    /// Returns storage errors from either store.
    pub fn resume(&mut self) -> Result<Option<Session>> {
        let _span = tracing::debug_span!("resume").entered();

        let Some(username) = self.accounts.read_scalar(CURRENT_USER_KEY) else {
            tracing::debug!("no current user");
            return Ok(None);
        };

        let registry: Vec<Credential> = self.accounts.read_list_strict(USERS_KEY)?;
        if !registry.iter().any(|c| c.username == username) {
            tracing::warn!(username = %username, "clearing marker for unregistered user");
            self.accounts.delete_scalar(CURRENT_USER_KEY)?;
            return Ok(None);
        }

        let record = self.load_or_create(&username)?;
        tracing::debug!(username = %username, "session resumed");
        Ok(Some(Session::from_record(record)))
    }

    /// Flushes the session's collections and clears the current-user marker.
    ///
    /// The marker is only cleared when it names this session's user.
    ///
    /// # Errors
    ///
    /// Returns storage errors; the session is consumed either way.
    pub fn logout(&mut self, session: Session) -> Result<()> {
        let _span = tracing::debug_span!("logout", username = %session.username()).entered();

        self.records.put(&session.to_record())?;

        if self.accounts.read_scalar(CURRENT_USER_KEY).as_deref() == Some(session.username()) {
            self.accounts.delete_scalar(CURRENT_USER_KEY)?;
        }

        tracing::debug!("logged out");
        Ok(())
    }

    /// Validates a draft and appends the resulting launch entry.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchdeckError::Validation`] for incomplete drafts, or a storage
    /// error if the record cannot be written.
    pub fn add_launch_entry(
        &mut self,
        session: &mut Session,
        draft: LaunchDraft,
    ) -> Result<LaunchEntry> {
        let _span = tracing::debug_span!("add_launch_entry", username = %session.username()).entered();

        let entry = draft.into_entry()?;
        let mut record = session.to_record();
        record.games.push(entry.clone());
        self.commit(session, record)?;

        tracing::debug!(id = %entry.id, name = %entry.name, "launch entry added");
        Ok(entry)
    }

    /// Validates a draft and appends the resulting media entry.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchdeckError::Validation`] for incomplete drafts, or a storage
    /// error if the record cannot be written.
    pub fn add_media_entry(&mut self, session: &mut Session, draft: MediaDraft) -> Result<MediaEntry> {
        let _span = tracing::debug_span!("add_media_entry", username = %session.username()).entered();

        let entry = draft.into_entry()?;
        let mut record = session.to_record();
        record.files.push(entry.clone());
        self.commit(session, record)?;

        tracing::debug!(id = %entry.id, kind = %entry.kind, "media entry added");
        Ok(entry)
    }

    /// Removes the entry with `id` from whichever collection holds it.
    ///
    /// Returns `false` and writes nothing when no entry matches.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the record cannot be written.
    pub fn delete_entry(&mut self, session: &mut Session, id: &str) -> Result<bool> {
        let _span = tracing::debug_span!("delete_entry", username = %session.username(), id = %id).entered();

        if !session.contains_entry(id) {
            tracing::debug!("no entry with this id");
            return Ok(false);
        }

        let mut record = session.to_record();
        record.games.retain(|g| g.id != id);
        record.files.retain(|f| f.id != id);
        self.commit(session, record)?;

        tracing::debug!("entry deleted");
        Ok(true)
    }

    /// Every username with a stored record.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the structured store cannot be opened.
    pub fn users(&mut self) -> Result<Vec<String>> {
        self.records.list_keys()
    }

    fn commit(&mut self, session: &mut Session, record: UserRecord) -> Result<()> {
        self.records.put(&record)?;
        session.replace(record);
        Ok(())
    }

    /// Loads a user's record, importing flat-key lists or creating an empty
    /// record when none is stored yet.
    fn load_or_create(&mut self, username: &str) -> Result<UserRecord> {
        if let Some(record) = self.records.get(username)? {
            return Ok(record);
        }

        let games_key = games_key(username);
        let files_key = files_key(username);

        let record = if self.accounts.contains(&games_key) || self.accounts.contains(&files_key) {
            let record = UserRecord {
                username: username.to_string(),
                games: self.accounts.read_list(&games_key),
                files: self.accounts.read_list(&files_key),
            };
            tracing::info!(
                username = %username,
                games = record.games.len(),
                files = record.files.len(),
                "importing flat-key collections"
            );
            record
        } else {
            UserRecord::new(username)
        };

        self.records.put(&record)?;
        self.accounts.delete_scalar(&games_key)?;
        self.accounts.delete_scalar(&files_key)?;
        Ok(record)
    }
}

impl<S: Storage + std::fmt::Debug> std::fmt::Debug for Launcher<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Launcher")
            .field("accounts", &self.accounts)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}
