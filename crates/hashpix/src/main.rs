//! hashpix CLI - Rename images to their content hash.
//!
//! hashpix scans a flat directory, converts non-canonical image formats
//! (webp → png, jpeg → jpg) and renames each image to the SHA-256 digest
//! of its content, preserving the extension. Files already named after
//! their digest are skipped, and an occupied target name is never
//! overwritten.
//!
//! # Usage
//!
//! ```bash
//! # Process a directory of images
//! hashpix ./photos
//!
//! # Debug logging
//! hashpix --verbose ./photos
//! ```

use clap::Parser;
use std::path::PathBuf;

mod cli;
mod logging;

/// hashpix - Content-addressed renaming for image directories.
#[derive(Parser, Debug)]
#[command(name = "hashpix")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory whose images should be renamed
    directory: Option<PathBuf>,

    /// Path to a config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // An explicitly passed config file must load; the implicit default
    // location falls back to defaults with a warning.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match &cli.config {
        Some(path) => hashpix_core::Config::load_from(path)?,
        None => match hashpix_core::Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: Failed to load config: {e}\n  Using default configuration.");
                hashpix_core::Config::default()
            }
        },
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("hashpix v{}", hashpix_core::VERSION);

    let Some(directory) = cli.directory else {
        tracing::error!("No directory specified");
        return Ok(());
    };

    cli::run::execute(&directory, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_directory_is_optional() {
        let cli = Cli::try_parse_from(["hashpix"]).unwrap();
        assert!(cli.directory.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from(["hashpix", "--verbose", "--json-logs", "./photos"]).unwrap();
        assert_eq!(cli.directory, Some(PathBuf::from("./photos")));
        assert!(cli.verbose);
        assert!(cli.json_logs);
    }
}
