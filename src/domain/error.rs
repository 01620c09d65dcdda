//! Error types for launchdeck.
//!
//! This module defines the centralized error type [`LaunchdeckError`] and a type alias
//! [`Result`] used throughout the crate. A read of an absent user record is not an
//! error: storage lookups return `Option` and callers treat `None` as empty state.

use thiserror::Error;

/// The main error type for launchdeck operations.
///
/// Every variant is terminal for the single operation that produced it. Nothing in
/// the crate retries; the caller surfaces the message and the user re-triggers the
/// action.
///
/// # Examples
///
/// ```
/// use launchdeck::LaunchdeckError;
///
/// let err = LaunchdeckError::Validation("name is required".to_string());
/// assert_eq!(err.to_string(), "Validation error: name is required");
/// ```
#[derive(Debug, Error)]
pub enum LaunchdeckError {
    /// The username exists but the supplied password does not match.
    ///
    /// Raised by login without touching any stored state.
    #[error("Invalid credential")]
    InvalidCredential,

    /// Required input is missing.
    ///
    /// Raised for blank login fields and for add-entry drafts lacking a name or
    /// a url/file payload. The string names the missing field.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The storage engine failed to initialize or to complete an operation.
    ///
    /// Covers corrupt store files and serialization failures. The string
    /// describes what went wrong.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations via `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for launchdeck operations.
pub type Result<T> = std::result::Result<T, LaunchdeckError>;
