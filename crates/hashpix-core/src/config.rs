//! Configuration management for hashpix.
//!
//! Configuration is loaded from a platform config directory with sensible
//! defaults. The extension tables are plain data so the canonical and
//! convertible sets can be extended without touching pipeline logic.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Root configuration structure for hashpix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extension tables
    pub formats: FormatTable,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.formats.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.hashpix.hashpix/config.toml
    /// - Linux: ~/.config/hashpix/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\hashpix\config\config.toml
    ///
    /// Falls back to ~/.hashpix/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "hashpix", "hashpix")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".hashpix").join("config.toml")
            })
    }
}

/// The canonical/convertible extension partition.
///
/// Matching is case-sensitive and includes the leading dot, so `photo.JPG`
/// is not recognized as an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatTable {
    /// Extensions accepted as final; no conversion performed
    pub canonical: Vec<String>,

    /// Extensions converted before hashing, mapped to their canonical target
    pub convertible: BTreeMap<String, String>,
}

impl Default for FormatTable {
    fn default() -> Self {
        Self {
            canonical: vec![".png".to_string(), ".jpg".to_string()],
            convertible: BTreeMap::from([
                (".webp".to_string(), ".png".to_string()),
                (".jpeg".to_string(), ".jpg".to_string()),
            ]),
        }
    }
}

impl FormatTable {
    /// True iff the file name carries a recognized image extension.
    pub fn is_image(&self, name: &str) -> bool {
        let (_, ext) = split_name(name);
        self.canonical.iter().any(|c| c == ext) || self.convertible.contains_key(ext)
    }

    /// True iff the file name carries a canonical extension (no conversion needed).
    pub fn is_canonical(&self, name: &str) -> bool {
        let (_, ext) = split_name(name);
        self.canonical.iter().any(|c| c == ext)
    }

    /// The canonical extension a convertible extension maps to, if any.
    pub fn conversion_target(&self, extension: &str) -> Option<&str> {
        self.convertible.get(extension).map(String::as_str)
    }

    /// Check that every convertible extension maps to a canonical one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (source, target) in &self.convertible {
            if !self.canonical.iter().any(|c| c == target) {
                return Err(ConfigError::ValidationError(format!(
                    "convertible extension {source} maps to {target}, \
                     which is not in the canonical set"
                )));
            }
        }
        Ok(())
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level ("trace", "debug", "info", "warn", "error")
    pub level: String,

    /// Log format ("pretty" or "json")
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Split a file name into stem and extension, extension keeping its dot.
///
/// A name without a dot, or a dotfile like `.gitignore`, has an empty
/// extension.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name() {
        assert_eq!(split_name("cat.webp"), ("cat", ".webp"));
        assert_eq!(split_name("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_name("README"), ("README", ""));
        assert_eq!(split_name(".gitignore"), (".gitignore", ""));
    }

    #[test]
    fn test_default_partition() {
        let table = FormatTable::default();
        assert!(table.is_image("a.png"));
        assert!(table.is_image("a.jpg"));
        assert!(table.is_image("a.webp"));
        assert!(table.is_image("a.jpeg"));
        assert!(!table.is_image("a.txt"));
        assert!(!table.is_image("a"));

        assert!(table.is_canonical("a.png"));
        assert!(table.is_canonical("a.jpg"));
        assert!(!table.is_canonical("a.webp"));
        assert!(!table.is_canonical("a.jpeg"));
    }

    #[test]
    fn test_extension_matching_is_case_sensitive() {
        let table = FormatTable::default();
        assert!(!table.is_image("photo.JPG"));
        assert!(!table.is_image("photo.Png"));
    }

    #[test]
    fn test_conversion_targets() {
        let table = FormatTable::default();
        assert_eq!(table.conversion_target(".webp"), Some(".png"));
        assert_eq!(table.conversion_target(".jpeg"), Some(".jpg"));
        assert_eq!(table.conversion_target(".gif"), None);
    }

    #[test]
    fn test_default_table_validates() {
        assert!(FormatTable::default().validate().is_ok());
    }

    #[test]
    fn test_load_from_rejects_dangling_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[formats]
canonical = [".png"]

[formats.convertible]
".webp" = ".bmp"
"#,
        )
        .unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[formats]
canonical = [".png"]

[formats.convertible]
".webp" = ".png"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.formats.is_canonical("a.png"));
        assert!(!config.formats.is_image("a.jpg"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }
}
