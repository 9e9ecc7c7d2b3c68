//! Shared utility functions for projects crates

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so tests and
/// sandboxed shells can redirect it.
pub fn get_home_dir() -> Result<Utf8PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Ok(Utf8PathBuf::from(home));
        }
    }

    let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
    Utf8PathBuf::from_path_buf(home)
        .map_err(|_| Error::invalid_config("Home directory path is not valid UTF-8"))
}

/// Expand a leading `~` or `~/` to the home directory
pub fn expand_tilde(path: &Utf8Path) -> Result<Utf8PathBuf> {
    let raw = path.as_str();
    if raw == "~" {
        return get_home_dir();
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        return Ok(get_home_dir()?.join(rest));
    }
    Ok(path.to_owned())
}
