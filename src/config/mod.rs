//! Configuration management for cvefeed.
//!
//! Configuration is read from `~/.config/cvefeed/config.toml` at startup.
//! The file is optional: when it doesn't exist every value takes its default,
//! and nothing is written to disk. Command-line flags override the file.

pub mod colors;

pub use colors::ColorConfig;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FEED_URL: &str = "https://cvefeed.io/rssfeed/latest.xml";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub colors: ColorConfig,
}

/// Where to fetch from and how strictly to read the document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub url: String,
    pub timeout_secs: u64,
    /// Abort on the first broken item instead of skipping it.
    pub strict: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            strict: false,
        }
    }
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    /// when the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_config_path()?)
    }

    /// Load configuration from `path`.
    ///
    /// A missing file yields the defaults. An unreadable or invalid file is
    /// an error. Missing fields in the file use default values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate().map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;

        Ok(config)
    }

    /// Reject values that parse but can't work.
    pub fn validate(&self) -> Result<(), String> {
        if self.feed.timeout_secs == 0 {
            return Err("feed.timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }

    /// Get the default config file path: `~/.config/cvefeed/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("cvefeed").join("config.toml"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config file at {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.feed, FeedConfig::default());
        assert_eq!(config.feed.url, DEFAULT_FEED_URL);
        assert_eq!(config.colors.viewed_row, Color::DarkGray);
    }

    #[test]
    fn test_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"
[feed]
url = "https://example.com/cves.xml"
strict = true

[colors]
viewed_row = "#636363"
"##
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();

        assert_eq!(config.feed.url, "https://example.com/cves.xml");
        assert!(config.feed.strict);
        assert_eq!(config.feed.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.colors.viewed_row, Color::Rgb(99, 99, 99));
        assert_eq!(config.colors.header, Color::Magenta);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.feed, FeedConfig::default());
        assert_eq!(config.colors.row, Color::Cyan);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[feed]\ntimeout_secs = 0\n").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_invalid_config_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[colors]\nrow = \"not-a-color\"\n").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
