//! Content-addressed renaming.

use std::path::Path;

use crate::config::split_name;
use crate::error::FileError;
use crate::pipeline::hash::{content_hash, is_already_hashed};

/// Outcome of a single rename attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file was renamed to its content hash
    Renamed { new_name: String },
    /// The file's stem is already a digest; nothing to do
    AlreadyHashed,
    /// A file with the target name exists; the source was left in place
    CollisionSkipped { target: String },
}

/// Rename a file to `<sha256-of-content><extension>`.
///
/// Already-hashed files are a no-op, and an occupied target name causes
/// a skip rather than an overwrite.
pub fn rename_to_hash(dir: &Path, name: &str) -> Result<RenameOutcome, FileError> {
    let (stem, extension) = split_name(name);

    if is_already_hashed(stem) {
        tracing::debug!("File {} is already a hash, skipping", name);
        return Ok(RenameOutcome::AlreadyHashed);
    }

    let path = dir.join(name);
    let digest = content_hash(&path).map_err(|source| FileError::Hash {
        path: path.clone(),
        source,
    })?;

    let new_name = format!("{digest}{extension}");
    let new_path = dir.join(&new_name);

    if new_path.exists() {
        tracing::info!(
            "File with the name {} already exists, skipping the renaming of {}",
            new_name,
            name
        );
        return Ok(RenameOutcome::CollisionSkipped { target: new_name });
    }

    std::fs::rename(&path, &new_path).map_err(|source| FileError::Rename { path, source })?;

    tracing::info!("File renamed from {} to {}", name, new_name);
    Ok(RenameOutcome::Renamed { new_name })
}
