//! Data directory resolution and path expansion.
//!
//! Settings and logs live in a per-user data directory. The location follows
//! the XDG base directory convention and falls back to the working directory
//! when no home directory is known.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "swipekit";

/// Returns the default data directory.
///
/// Resolution order: `$XDG_DATA_HOME/swipekit`, then
/// `$HOME/.local/share/swipekit`, then `./.swipekit`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env::var("XDG_DATA_HOME").ok(), env::var("HOME").ok())
}

fn data_dir_from(xdg_data_home: Option<String>, home: Option<String>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|p| !p.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }

    home.filter(|p| !p.is_empty()).map_or_else(
        || PathBuf::from(format!(".{APP_DIR}")),
        |home| PathBuf::from(home).join(".local").join("share").join(APP_DIR),
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, or any path when `$HOME` is unset, are
/// returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => PathBuf::from(home),
        (path, Some(home)) if path.starts_with("~/") => PathBuf::from(home).join(&path[2..]),
        (path, _) => PathBuf::from(path),
    }
}
