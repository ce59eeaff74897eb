//! Configuration management for moodgen
//!
//! This module handles loading, parsing, and managing configuration from:
//! - Configuration files (TOML format)
//! - Command-line arguments (applied by the `cli` module)
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::record::MoodRecord;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "moodgen.toml";

/// Largest accepted JSON indentation width
pub const MAX_INDENT: usize = 16;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Export configuration
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Moods to export instead of the built-in set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moods: Vec<MoodRecord>,
}

/// Output location and formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the data file is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Data file name inside `output_dir`
    #[serde(default = "default_filename")]
    pub filename: String,

    /// JSON indentation width in spaces
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Validate records before writing
    #[serde(default = "default_validate")]
    pub validate: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default)]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

// Default value functions
fn default_output_dir() -> PathBuf {
    PathBuf::from("Assets/Data")
}

fn default_filename() -> String {
    "mood_buttons.json".to_string()
}

fn default_indent() -> usize {
    4
}

fn default_validate() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            filename: default_filename(),
            indent: default_indent(),
            validate: default_validate(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the configuration file to read
    ///
    /// An explicit path must exist. Without one, the first existing
    /// candidate from [`Config::candidate_paths`] is returned, or `None`
    /// when there is none.
    pub fn locate(path: Option<&Path>) -> Result<Option<PathBuf>> {
        match path {
            Some(p) if !p.exists() => Err(ConfigError::FileNotFound(p.display().to_string()).into()),
            Some(p) => Ok(Some(p.to_path_buf())),
            None => Ok(Self::candidate_paths().into_iter().find(|p| p.exists())),
        }
    }

    /// Load configuration from a file
    ///
    /// Falls back to defaults when no file is found.
    ///
    /// # Arguments
    /// * `path` - Explicit configuration file path
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        match Self::locate(path)? {
            Some(path) => Self::read_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Read and parse a TOML configuration file
    pub fn read_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Configuration files checked when no path is given, in order
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("moodgen").join("config.toml"));
        }
        paths
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - First existing candidate, or the local file name
    pub fn default_config_path() -> PathBuf {
        Self::candidate_paths()
            .into_iter()
            .find(|p| p.exists())
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()).into())
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        self.export.validate()
    }

    /// Full path of the exported data file
    pub fn output_path(&self) -> PathBuf {
        self.export.output_dir.join(&self.export.filename)
    }
}

impl ExportConfig {
    /// Check output location and formatting values
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "export.output_dir".to_string(),
                value: String::new(),
            }
            .into());
        }

        if !is_plain_file_name(&self.filename) {
            return Err(ConfigError::InvalidValue {
                field: "export.filename".to_string(),
                value: self.filename.clone(),
            }
            .into());
        }

        if self.indent > MAX_INDENT {
            return Err(ConfigError::InvalidValue {
                field: "export.indent".to_string(),
                value: self.indent.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Check that `name` names a file directly inside a directory
pub fn is_plain_file_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoodgenError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.export.output_dir, PathBuf::from("Assets/Data"));
        assert_eq!(config.export.filename, "mood_buttons.json");
        assert_eq!(config.export.indent, 4);
        assert!(config.export.validate);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.moods.is_empty());
    }

    #[test]
    fn test_output_path() {
        let config = Config::default();
        assert_eq!(
            config.output_path(),
            Path::new("Assets/Data").join("mood_buttons.json")
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
[export]
output_dir = "build/data"

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.export.output_dir, PathBuf::from("build/data"));
        assert_eq!(config.export.filename, "mood_buttons.json");
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_moods_from_toml() {
        let config = Config::from_toml_str(
            r##"
[[moods]]
id = "happy"
text = "Happy"
color_hex = "#FFD700"
icon_path = "Icons/HappyIcon"
"##,
        )
        .unwrap();
        assert_eq!(
            config.moods,
            vec![MoodRecord::new("happy", "Happy", "#FFD700", "Icons/HappyIcon")]
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.moods = crate::record::default_moods();
        let rendered = config.to_toml().unwrap();
        let parsed = Config::from_toml_str(&rendered).unwrap();
        assert_eq!(parsed.moods, config.moods);
        assert_eq!(parsed.export.output_dir, config.export.output_dir);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml_str("[export\noutput_dir = 1");
        assert!(matches!(
            result,
            Err(MoodgenError::Config(ConfigError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from_file(Some(dir.path().join("nope.toml").as_path()));
        assert!(matches!(
            result,
            Err(MoodgenError::Config(ConfigError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moodgen.toml");
        fs::write(&path, "[export]\nindent = 2\n").unwrap();
        let config = Config::load_from_file(Some(path.as_path())).unwrap();
        assert_eq!(config.export.indent, 2);
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.export.filename = "../mood_buttons.json".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.export.indent = MAX_INDENT + 1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.export.output_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_plain_file_name() {
        assert!(is_plain_file_name("mood_buttons.json"));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name("data/mood_buttons.json"));
        assert!(!is_plain_file_name("data\\mood_buttons.json"));
    }
}
