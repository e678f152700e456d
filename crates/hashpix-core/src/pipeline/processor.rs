//! Directory processing - wires conversion and renaming together.
//!
//! Per-file failures are contained here: one bad file is logged and
//! counted, and the scan moves on. Only a bad target directory aborts
//! the run, before anything is touched.

use std::path::Path;

use crate::config::FormatTable;
use crate::error::{ConfigError, FileError};
use crate::types::RunStats;

use super::convert::convert;
use super::discovery::list_entries;
use super::rename::{rename_to_hash, RenameOutcome};

/// Outcome of processing a single image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Whether a format conversion happened first
    pub converted: bool,
    /// What the rename step did
    pub rename: RenameOutcome,
}

/// Process every image in a directory: convert non-canonical formats,
/// then rename each file to its content hash.
pub fn process_directory(dir: &Path, table: &FormatTable) -> Result<RunStats, ConfigError> {
    let entries = list_entries(dir)?;
    tracing::debug!("Scanning {} entries in {:?}", entries.len(), dir);

    let mut stats = RunStats::default();
    for name in entries {
        if !table.is_image(&name) {
            stats.ignored += 1;
            continue;
        }

        match process_file(dir, &name, table) {
            Ok(outcome) => {
                if outcome.converted {
                    stats.converted += 1;
                }
                match outcome.rename {
                    RenameOutcome::Renamed { .. } => stats.renamed += 1,
                    RenameOutcome::AlreadyHashed => stats.already_hashed += 1,
                    RenameOutcome::CollisionSkipped { .. } => stats.collisions += 1,
                }
            }
            Err(e) => {
                tracing::warn!("File named {} could not be renamed: {}", name, e);
                stats.failed += 1;
            }
        }
    }

    Ok(stats)
}

/// Process one image: convert first if the extension is not canonical,
/// then rename to the content hash.
fn process_file(dir: &Path, name: &str, table: &FormatTable) -> Result<FileOutcome, FileError> {
    let mut name = name.to_string();
    let mut converted = false;

    if !table.is_canonical(&name) {
        name = convert(dir, &name, table)?;
        converted = true;
    }

    let rename = rename_to_hash(dir, &name)?;
    Ok(FileOutcome { converted, rename })
}
