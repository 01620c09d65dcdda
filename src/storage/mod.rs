//! Storage layer for credentials, session markers and per-user collections.
//!
//! # Modules
//!
//! - `backend`: [`Storage`] trait for the structured per-user store
//! - `json`: JSON file implementation of [`Storage`]
//! - `kv`: flat key-value [`SessionStore`] for the credential registry and
//!   session marker
//! - `models`: [`UserRecord`], the unit of structured storage

pub mod backend;
mod file;
pub mod json;
pub mod kv;
pub mod models;

pub use backend::Storage;
pub use json::JsonStorage;
pub use kv::{files_key, games_key, SessionStore, CURRENT_USER_KEY, USERS_KEY};
pub use models::UserRecord;
