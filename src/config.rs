//! Configuration file parser for ~/.config/newsdesk/config.toml.
//!
//! The config file is optional: a missing file yields `Config::default()`.
//! Unknown keys are silently ignored by serde (with `deny_unknown_fields` off),
//! though we log a warning when the file contains potential typos.
use crate::news::{ArticleCount, DateFormat, DateFormatError, PlaceholderImage};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),

    #[error(transparent)]
    DateFormat(#[from] DateFormatError),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme variant name ("dark" or "light").
    pub theme: String,

    /// Count preselected in the form. Must be one of 4, 6, 8, 10, 12.
    pub default_article_count: ArticleCount,

    /// strftime pattern for article dates.
    pub date_format: String,

    /// Placeholder-image locator parameters.
    pub placeholder: PlaceholderImage,

    /// Custom keybinding overrides. Keys are action names, values are key strings.
    pub keybindings: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            default_article_count: ArticleCount::default(),
            date_format: crate::news::DEFAULT_DATE_FORMAT.to_string(),
            placeholder: PlaceholderImage::default(),
            keybindings: HashMap::new(),
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Invalid `date_format` → `Err(ConfigError::DateFormat)`
    /// - Unknown keys → silently accepted (serde default behavior), logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // File deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            tracing::debug!("Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            let known_keys = [
                "theme",
                "default_article_count",
                "date_format",
                "placeholder",
                "keybindings",
            ];
            for key in raw.keys() {
                if !known_keys.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(content)?;
        config.date_format()?;
        tracing::info!(
            theme = %config.theme,
            count = %config.default_article_count,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// The validated date format.
    pub fn date_format(&self) -> Result<DateFormat, DateFormatError> {
        DateFormat::parse(&self.date_format)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.default_article_count.get(), 4);
        assert_eq!(config.date_format, "%-m/%-d/%Y");
        assert_eq!(config.placeholder, PlaceholderImage::default());
        assert!(config.keybindings.is_empty());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let path = Path::new("/tmp/newsdesk_test_nonexistent_config.toml");
        let config = Config::load(path).unwrap();
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_empty_file_returns_default() {
        let dir = std::env::temp_dir().join("newsdesk_config_test_empty");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "dark");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_whitespace_only_returns_default() {
        let config = Config::parse("   \n  \n  ").unwrap();
        assert_eq!(config.default_article_count.get(), 4);
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing() {
        let config = Config::parse("theme = \"light\"\n").unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.default_article_count.get(), 4);
        assert_eq!(config.placeholder.width, 300);
    }

    #[test]
    fn test_full_config() {
        let dir = std::env::temp_dir().join("newsdesk_config_test_full");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let content = r#"
theme = "light"
default_article_count = 10
date_format = "%Y-%m-%d"

[placeholder]
base = "https://img.example.com"
width = 640
height = 480
font_size = 18

[keybindings]
quit = "Ctrl+q"
submit = "F5"
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.default_article_count.get(), 10);
        assert_eq!(config.date_format().unwrap().as_str(), "%Y-%m-%d");
        assert_eq!(config.placeholder.base, "https://img.example.com");
        assert_eq!(config.placeholder.width, 640);
        assert_eq!(config.placeholder.height, 480);
        assert_eq!(config.placeholder.font_size, 18);
        assert_eq!(
            config.keybindings.get("quit").map(String::as_str),
            Some("Ctrl+q")
        );
        assert_eq!(
            config.keybindings.get("submit").map(String::as_str),
            Some("F5")
        );

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_partial_placeholder_table() {
        let config = Config::parse("[placeholder]\nwidth = 120\n").unwrap();
        assert_eq!(config.placeholder.width, 120);
        assert_eq!(config.placeholder.height, 200);
        assert_eq!(config.placeholder.base, "/api/placeholder");
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let result = Config::parse("this is not [valid toml");
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Invalid TOML"));
    }

    #[test]
    fn test_disallowed_article_count_rejected() {
        let result = Config::parse("default_article_count = 5\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        let result = Config::parse("date_format = \"%Q\"\n");
        assert!(matches!(result, Err(ConfigError::DateFormat(_))));
    }

    #[test]
    fn test_unknown_keys_accepted() {
        let content = r#"
theme = "dark"
totally_fake_key = "should not fail"
another_unknown = 42
"#;
        let config = Config::parse(content).unwrap();
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_wrong_type_returns_error() {
        assert!(Config::parse("theme = 42\n").is_err());
    }

    #[test]
    fn test_too_large_file_rejected() {
        let dir = std::env::temp_dir().join("newsdesk_config_test_too_large");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let content = "a".repeat(1_048_577);
        std::fs::write(&path, content).unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge(_)));
        assert!(err.to_string().contains("too large"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
