//! The normalize-and-rename pipeline.
//!
//! Stages, in the order a file passes through them:
//! - **discovery**: Flat listing of directory entries
//! - **convert**: Re-encode non-canonical formats to their canonical target
//! - **hash**: Streaming SHA-256 content digests
//! - **rename**: Content-addressed renaming with collision skips
//! - **processor**: Orchestrates the run with per-file error containment

pub mod convert;
pub mod discovery;
pub mod hash;
pub mod processor;
pub mod rename;

// Re-exports for convenient access
pub use convert::convert;
pub use discovery::list_entries;
pub use hash::{content_hash, is_already_hashed};
pub use processor::{process_directory, FileOutcome};
pub use rename::{rename_to_hash, RenameOutcome};
