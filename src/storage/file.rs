//! JSON file helpers shared by the storage backends.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use crate::domain::error::{LaunchdeckError, Result};

/// Loads and parses a JSON document, or `None` if the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&contents).map_err(|e| {
        LaunchdeckError::StorageUnavailable(format!(
            "failed to parse {}: {e}",
            path.display()
        ))
    })?;
    Ok(Some(data))
}

/// Writes a JSON document atomically.
///
/// Writes to a sibling temporary file first, then renames it over the target,
/// so the target is never left half-written.
///
/// # Errors
///
/// Returns an error if serialization, the temporary write, or the rename fails.
pub(crate) fn write_json_atomic<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data).map_err(|e| {
        LaunchdeckError::StorageUnavailable(format!("failed to serialize JSON: {e}"))
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("tmp");

    tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
    std::fs::write(&tmp_path, json)?;

    tracing::trace!("renaming temporary file to final location");
    std::fs::rename(&tmp_path, path)?;

    Ok(())
}
