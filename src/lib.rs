//! launchdeck: a personal launcher for game/app shortcuts and media files.
//!
//! Users log in with a username and password (unknown usernames are registered
//! on the spot), then manage two personal collections: launch entries (links,
//! custom application schemes, local paths or uploaded executables) and media
//! entries (documents, images, videos). Everything is persisted locally.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Shell binary (main.rs)                             │  ← Presentation
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Launcher: login, logout, add, delete             │
//! │  - Session: explicit logged-in context              │
//! │  - Command parsing                                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌───────────────────────────┐   ┌──────────────────────┐
//! │ Storage Layer (storage/)  │   │ Protocol catalog     │
//! │ - SessionStore (flat kv)  │   │ (protocols)          │
//! │ - Storage trait + JSON    │   └──────────────────────┘
//! └───────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Entries, drafts, credentials, errors (domain/)   │
//! │  - Data directory resolution (infrastructure/)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Durable Layout
//!
//! Two files in the data directory:
//!
//! - `session.json`: flat key-value store holding `currentUser` and the `users`
//!   credential registry (plus legacy `<user>_games` / `<user>_files` lists,
//!   imported and removed on first login)
//! - `records.json`: one record per username with its games and files
//!
//! # Configuration
//!
//! Optional TOML file, every key optional:
//!
//! ```toml
//! data_dir = "~/.local/share/launchdeck"
//! trace_level = "debug"
//! log_to_stderr = true
//! password_scheme = "sha256"   # or "plaintext" (default)
//! trace_file_max_bytes = 10485760
//! ```
//!
//! # Example
//!
//! ```no_run
//! use launchdeck::domain::{LaunchDraft, LaunchKind};
//! use launchdeck::{initialize, Config};
//!
//! let mut launcher = initialize(&Config::default())?;
//! let (mut session, _) = launcher.login("alice", "pw1")?;
//! launcher.add_launch_entry(&mut session, LaunchDraft::link("Steam", "steam://", LaunchKind::Link))?;
//! launcher.logout(session)?;
//! # Ok::<(), launchdeck::LaunchdeckError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod protocols;
pub mod storage;

pub mod observability;

pub use app::{Launcher, LoginOutcome, Session};
pub use domain::{LaunchdeckError, Result};

use domain::{PasswordPolicy, Plaintext, Sha256Digest};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use storage::{JsonStorage, SessionStore};

/// Session store file name inside the data directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Structured store file name inside the data directory.
pub const RECORDS_FILE_NAME: &str = "records.json";

/// Default trace file rotation threshold (10 MiB).
const DEFAULT_TRACE_FILE_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// How new passwords are stored in the credential registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    /// Raw text, as typed.
    #[default]
    Plaintext,
    /// Unsalted SHA-256 hex digest.
    Sha256,
}

impl PasswordScheme {
    #[must_use]
    pub fn policy(self) -> Box<dyn PasswordPolicy> {
        match self {
            Self::Plaintext => Box::new(Plaintext),
            Self::Sha256 => Box::new(Sha256Digest),
        }
    }
}

/// Runtime configuration, usually read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Storage directory. A leading `~` is expanded. Falls back to
    /// [`infrastructure::get_data_dir`].
    pub data_dir: Option<String>,

    /// Filter directive for tracing, e.g. `info` or `launchdeck=debug`.
    pub trace_level: Option<String>,

    /// Also print log lines to stderr.
    pub log_to_stderr: bool,

    pub password_scheme: PasswordScheme,

    /// Size at which the trace file rotates. Default: 10 MiB.
    pub trace_file_max_bytes: Option<u64>,
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchdeckError::Config`] on syntax errors, unknown keys or
    /// invalid values.
    ///
    /// # Example
    ///
    /// ```
    /// use launchdeck::{Config, PasswordScheme};
    ///
    /// let config = Config::from_toml_str("password_scheme = \"sha256\"\ntrace_level = \"debug\"")?;
    /// assert_eq!(config.password_scheme, PasswordScheme::Sha256);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// # Ok::<(), launchdeck::LaunchdeckError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| LaunchdeckError::Config(format!("failed to parse config TOML: {e}")))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchdeckError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LaunchdeckError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Resolved storage directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.as_deref().map_or_else(infrastructure::get_data_dir, |dir| {
            PathBuf::from(infrastructure::expand_tilde(dir))
        })
    }

    #[must_use]
    pub fn trace_file_max_bytes(&self) -> u64 {
        self.trace_file_max_bytes
            .unwrap_or(DEFAULT_TRACE_FILE_MAX_BYTES)
    }
}

/// Opens both stores in the configured data directory.
///
/// The structured store is opened lazily by its first operation; the session
/// store is loaded here.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or the session
/// store file is unreadable.
pub fn initialize(config: &Config) -> Result<Launcher<JsonStorage>> {
    let data_dir = config.data_dir();
    tracing::debug!(data_dir = ?data_dir, scheme = ?config.password_scheme, "initializing launchdeck");

    std::fs::create_dir_all(&data_dir)?;

    let accounts = SessionStore::open(data_dir.join(SESSION_FILE_NAME))?;
    let records = JsonStorage::new(data_dir.join(RECORDS_FILE_NAME));

    Ok(Launcher::new(accounts, records, config.password_scheme.policy()))
}
