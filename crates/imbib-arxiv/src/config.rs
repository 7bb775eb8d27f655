//! Configuration for the arXiv backend
//!
//! Loaded from `<config_dir>/imbib/arxiv.toml` when present:
//!
//! ```toml
//! [bibtex]
//! entry_type = "online"
//! autokey = true
//! drop_empty_fields = true
//! align_fields = false
//! ```
//!
//! Every key is optional. The configuration is read-only once a renderer is built.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Backend configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArxivConfig {
    pub bibtex: BibtexConfig,
}

/// Citation rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BibtexConfig {
    /// Entry-type label emitted after `@`
    pub entry_type: String,
    /// Replace the placeholder key with a generated one
    pub autokey: bool,
    /// Remove fields with empty values
    pub drop_empty_fields: bool,
    /// Pad field names so `=` signs line up
    pub align_fields: bool,
}

impl Default for BibtexConfig {
    fn default() -> Self {
        Self {
            entry_type: "online".to_string(),
            autokey: true,
            drop_empty_fields: true,
            align_fields: false,
        }
    }
}

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ArxivConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load from the standard location, falling back to defaults when no file exists
    pub fn load_default() -> crate::Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config_dir>/imbib/arxiv.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("imbib").join("arxiv.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let label = &self.bibtex.entry_type;
        if label.is_empty() {
            return Err(ConfigError::Invalid("entry_type must not be empty".to_string()));
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Invalid(format!(
                "entry_type must be alphanumeric, got {:?}",
                label
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArxivError;

    #[test]
    fn test_default_config() {
        let config = ArxivConfig::default();
        assert_eq!(config.bibtex.entry_type, "online");
        assert!(config.bibtex.autokey);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ArxivConfig::from_toml("[bibtex]\nentry_type = \"misc\"\n").unwrap();
        assert_eq!(config.bibtex.entry_type, "misc");
        assert!(config.bibtex.drop_empty_fields);
        assert!(!config.bibtex.align_fields);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ArxivConfig::from_toml("").unwrap(), ArxivConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ArxivConfig::default();
        config.bibtex.align_fields = true;
        let parsed = ArxivConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_entry_type() {
        assert!(matches!(
            ArxivConfig::from_toml("[bibtex]\nentry_type = \"\"\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ArxivConfig::from_toml("[bibtex]\nentry_type = \"on line\"\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ArxivConfig::from_toml("[bibtex]\nautokey = \"yes\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arxiv.toml");
        std::fs::write(&path, "[bibtex]\nalign_fields = true\n").unwrap();

        let config = ArxivConfig::load(&path).unwrap();
        assert!(config.bibtex.align_fields);

        let missing = ArxivConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ArxivError::Config(ConfigError::Io(_)))));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arxiv.toml");
        std::fs::write(&path, "[bibtex]\nentry_type = \"\"\n").unwrap();

        let err = ArxivConfig::load(&path).unwrap_err();
        assert!(matches!(err, ArxivError::Config(ConfigError::Invalid(_))));
        assert!(err.to_string().starts_with("Config error: "));
    }
}
