//! Domain layer for launchdeck.
//!
//! Core types independent of how they are stored or presented.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Launch and media entry models, identifier generation
//! - [`draft`]: Add-entry drafts, presence validation, file-to-entry conversion
//! - [`credential`]: Credentials and the password policy seam
//!
//! # Examples
//!
//! ```
//! use launchdeck::domain::{LaunchDraft, LaunchKind, Result};
//!
//! fn steam() -> Result<()> {
//!     let entry = LaunchDraft::link("Steam", "steam://", LaunchKind::Link).into_entry()?;
//!     assert_eq!(entry.name, "Steam");
//!     assert!(!entry.is_embedded_file);
//!     Ok(())
//! }
//! # steam().unwrap();
//! ```

pub mod credential;
pub mod draft;
pub mod entry;
pub mod error;

pub use credential::{Credential, PasswordForm, PasswordPolicy, Plaintext, Sha256Digest};
pub use draft::{FilePayload, LaunchDraft, MediaDraft};
pub use entry::{new_entry_id, LaunchEntry, LaunchKind, MediaEntry, MediaKind};
pub use error::{LaunchdeckError, Result};
