//! The directory run: process every image and report a summary.

use std::path::Path;

use hashpix_core::{process_directory, Config, ConfigError};

/// Process the target directory and log the run summary.
///
/// A missing or non-directory target is a reported condition, not a
/// process failure: nothing is touched and the program exits normally.
pub fn execute(directory: &Path, config: &Config) -> anyhow::Result<()> {
    let stats = match process_directory(directory, &config.formats) {
        Ok(stats) => stats,
        Err(ConfigError::NotADirectory(path)) => {
            tracing::error!("The directory {} does not exist", path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        "Done: {} renamed, {} converted, {} already hashed, {} collision(s) skipped, \
         {} failed, {} non-image entries ignored",
        stats.renamed,
        stats.converted,
        stats.already_hashed,
        stats.collisions,
        stats.failed,
        stats.ignored
    );
    Ok(())
}
