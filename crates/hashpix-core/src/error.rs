//! Error types for the hashpix pipeline.
//!
//! Errors are split into two tiers: configuration errors abort the run
//! before any file is touched, while file errors are contained at the
//! single-file boundary and never stop the directory scan.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for hashpix operations.
#[derive(Error, Debug)]
pub enum HashpixError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Per-file processing errors
    #[error("File error: {0}")]
    File(#[from] FileError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
///
/// Any of these stops the run before any filesystem mutation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// The target path is missing or not a directory
    #[error("The directory {0} does not exist")]
    NotADirectory(PathBuf),

    /// Failed to list the target directory
    #[error("Failed to read directory {path}: {source}")]
    ScanError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Per-file processing errors, organized by stage.
///
/// Each variant carries the offending path so the caller can log the
/// failure and move on to the next file.
#[derive(Error, Debug)]
pub enum FileError {
    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Image re-encoding failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// No conversion target is mapped for the file's extension
    #[error("No conversion target for {path} (extension {extension})")]
    NoConversionTarget { path: PathBuf, extension: String },

    /// Content hashing failed while reading the file
    #[error("Hash error for {path}: {source}")]
    Hash {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Deleting the original after conversion failed
    #[error("Failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The rename itself failed
    #[error("Rename error for {path}: {source}")]
    Rename {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience type alias for hashpix results.
pub type Result<T> = std::result::Result<T, HashpixError>;

/// Convenience type alias for per-file results.
pub type FileResult<T> = std::result::Result<T, FileError>;
