//! # Path Utilities

use std::{
    ffi::OsString,
    fs,
    io,
    path::{Path, PathBuf},
};

/// Suffix of the staging file a transfer writes into before it is renamed into place.
pub const STAGING_SUFFIX: &str = ".part";

/// Expand `~` and `$VARS` in a user supplied path.
pub fn expand_path<P: AsRef<Path>>(path: P) -> anyhow::Result<PathBuf> {
    let raw = path.as_ref().to_string_lossy();
    let expanded = shellexpand::full(&raw)?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// The staging path for `path`: the same file name with [`STAGING_SUFFIX`] appended.
///
/// * Does not check that the path exists.
pub fn staging_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let mut name: OsString = path.file_name().unwrap_or_default().to_os_string();
    name.push(STAGING_SUFFIX);
    path.with_file_name(name)
}

/// Remove a file, treating "not found" as success.
pub fn remove_if_exists<P: AsRef<Path>>(path: P) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
