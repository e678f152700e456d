//! Shared types for run reporting.

use serde::Serialize;

/// Aggregate counts for one directory run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    /// Files renamed to their content hash
    pub renamed: usize,

    /// Files converted to a canonical format before renaming
    pub converted: usize,

    /// Files whose name was already a digest
    pub already_hashed: usize,

    /// Files skipped because the target name was occupied
    pub collisions: usize,

    /// Files whose processing failed (logged, run continued)
    pub failed: usize,

    /// Directory entries ignored as non-images
    pub ignored: usize,
}

impl RunStats {
    /// Total number of image files the run looked at.
    pub fn images_seen(&self) -> usize {
        self.renamed + self.already_hashed + self.collisions + self.failed
    }

    /// True iff the run changed nothing on disk.
    pub fn is_noop(&self) -> bool {
        self.renamed == 0 && self.converted == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_seen() {
        let stats = RunStats {
            renamed: 3,
            converted: 1,
            already_hashed: 2,
            collisions: 1,
            failed: 1,
            ignored: 5,
        };
        assert_eq!(stats.images_seen(), 7);
        assert!(!stats.is_noop());
    }

    #[test]
    fn test_default_is_noop() {
        assert!(RunStats::default().is_noop());
    }
}
