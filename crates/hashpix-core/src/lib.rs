//! hashpix-core - Content-addressed image renaming library.
//!
//! hashpix scans a flat directory of image files, converts non-canonical
//! formats to a canonical one, and renames each file to the SHA-256 digest
//! of its content, preserving the extension. Hash-named files are
//! idempotently skipped and an occupied target name is never overwritten.
//!
//! # Pipeline
//!
//! ```text
//! Scan directory → Convert (webp→png, jpeg→jpg) → Hash → Rename
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use hashpix_core::{process_directory, Config};
//!
//! fn main() -> Result<(), hashpix_core::ConfigError> {
//!     let config = Config::load()?;
//!     let stats = process_directory("./photos".as_ref(), &config.formats)?;
//!     println!("renamed {} file(s)", stats.renamed);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use config::{Config, FormatTable, LoggingConfig};
pub use error::{ConfigError, FileError, FileResult, HashpixError, Result};
pub use pipeline::{process_directory, RenameOutcome};
pub use types::RunStats;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
