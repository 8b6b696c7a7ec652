//! Lookup of settings and filter files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Resolve `name` to a path.
///
/// `name` is used as given when it names an existing file, otherwise it is
/// looked up in `search_dir`.
pub fn resolve_path(name: &str, search_dir: &Path) -> PathBuf {
    let given = Path::new(name);
    if given.is_file() {
        given.to_path_buf()
    } else {
        search_dir.join(name)
    }
}

/// Read a UTF-8 text file.
pub fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Final path component of `name`, or `name` itself when it is a URL.
pub fn basename(name: &str) -> &str {
    if name.contains("http://") || name.contains("https://") {
        return name;
    }
    Path::new(name)
        .file_name()
        .and_then(|file_name| file_name.to_str())
        .unwrap_or(name)
}
