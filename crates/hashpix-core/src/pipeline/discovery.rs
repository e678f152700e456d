//! Flat directory listing for candidate files.

use std::path::Path;

use crate::error::ConfigError;

/// List the file names in a directory, sorted for deterministic order.
///
/// Subdirectories are not descended into. Entries whose names are not
/// valid UTF-8 cannot be matched against the extension tables and are
/// skipped with a debug log.
pub fn list_entries(dir: &Path) -> Result<Vec<String>, ConfigError> {
    if !dir.is_dir() {
        return Err(ConfigError::NotADirectory(dir.to_path_buf()));
    }

    let scan_error = |source| ConfigError::ScanError {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(scan_error)? {
        let entry = entry.map_err(scan_error)?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::debug!("Skipping non-UTF-8 file name {:?}", raw),
        }
    }

    names.sort();
    Ok(names)
}
