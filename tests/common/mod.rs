#![allow(dead_code)]

use launchdeck::storage::JsonStorage;
use launchdeck::{initialize, Config, Launcher, PasswordScheme};
use std::path::Path;
use tempfile::TempDir;

pub fn config_for(dir: &Path, scheme: PasswordScheme) -> Config {
    Config {
        data_dir: Some(dir.to_string_lossy().into_owned()),
        password_scheme: scheme,
        ..Config::default()
    }
}

/// Launcher over fresh stores in a temporary directory.
pub fn launcher() -> (TempDir, Launcher<JsonStorage>) {
    let dir = TempDir::new().expect("temp dir");
    let launcher = reopen(dir.path());
    (dir, launcher)
}

/// A new launcher over whatever is already stored in `dir`.
pub fn reopen(dir: &Path) -> Launcher<JsonStorage> {
    initialize(&config_for(dir, PasswordScheme::Plaintext)).expect("initialize")
}
