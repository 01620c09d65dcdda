//! Path helpers for locating launchdeck's data directory.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "LAUNCHDECK_DATA_DIR";

/// Returns the default data directory.
///
/// Resolution order:
/// 1. `$LAUNCHDECK_DATA_DIR`
/// 2. `$XDG_DATA_HOME/launchdeck`
/// 3. `~/.local/share/launchdeck`
/// 4. `./.launchdeck` when no home directory is known
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = non_empty_env(DATA_DIR_ENV) {
        return PathBuf::from(expand_tilde(&dir));
    }

    if let Some(xdg) = non_empty_env("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("launchdeck");
    }

    home_dir().map_or_else(
        || PathBuf::from(".launchdeck"),
        |home| home.join(".local").join("share").join("launchdeck"),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, or when no home directory is known, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use launchdeck::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/~"), "relative/~");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = home_dir() else {
        return path.to_string();
    };
    let home = home.to_string_lossy();

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home.into_owned()
    } else {
        path.to_string()
    }
}

fn home_dir() -> Option<PathBuf> {
    non_empty_env("HOME")
        .or_else(|| non_empty_env("USERPROFILE"))
        .map(PathBuf::from)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
