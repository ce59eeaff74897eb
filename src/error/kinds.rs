use std::{fmt, io};

/// Crate-wide `Result` type using [`MoodgenError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, MoodgenError>;

/// Top-level error type for moodgen operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum MoodgenError {
    /// I/O errors from directory creation or file access.
    Io(io::Error),

    /// JSON encoding or decoding errors.
    Serialization(serde_json::Error),

    /// Mood records that break the output schema.
    Validation(ValidationError),

    /// Configuration errors.
    Config(ConfigError),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Schema violations found in a mood record sequence.
///
/// Indices are zero-based positions in the input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The sequence holds no records.
    NoRecords,

    /// A required field is empty or whitespace only.
    EmptyField { index: usize, field: &'static str },

    /// `color_hex` is not `#RRGGBB`.
    InvalidColor { id: String, value: String },

    /// Two records share an identifier.
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Record file with an extension we cannot decode.
    UnsupportedRecordFile(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for MoodgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodgenError::Io(e) => write!(f, "{e}"),
            MoodgenError::Serialization(e) => write!(f, "JSON error: {e}"),
            MoodgenError::Validation(e) => write!(f, "Invalid mood data: {e}"),
            MoodgenError::Config(e) => write!(f, "Configuration error: {e}"),
            MoodgenError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoRecords => write!(f, "no mood records to export"),
            ValidationError::EmptyField { index, field } => {
                write!(f, "record #{index} has an empty '{field}' field")
            }
            ValidationError::InvalidColor { id, value } => {
                write!(f, "record '{id}' has color '{value}', expected #RRGGBB")
            }
            ValidationError::DuplicateId { id, first, second } => {
                write!(f, "id '{id}' is used by records #{first} and #{second}")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::UnsupportedRecordFile(path) => {
                write!(f, "Unsupported record file (expected .json or .toml): {path}")
            }
        }
    }
}

impl std::error::Error for MoodgenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoodgenError::Io(e) => Some(e),
            MoodgenError::Serialization(e) => Some(e),
            MoodgenError::Validation(e) => Some(e),
            MoodgenError::Config(e) => Some(e),
            MoodgenError::Generic(_) => None,
        }
    }
}
impl std::error::Error for ValidationError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to MoodgenError ========================= */

impl From<io::Error> for MoodgenError {
    fn from(err: io::Error) -> Self {
        MoodgenError::Io(err)
    }
}

impl From<serde_json::Error> for MoodgenError {
    fn from(err: serde_json::Error) -> Self {
        MoodgenError::Serialization(err)
    }
}

impl From<ValidationError> for MoodgenError {
    fn from(err: ValidationError) -> Self {
        MoodgenError::Validation(err)
    }
}

impl From<ConfigError> for MoodgenError {
    fn from(err: ConfigError) -> Self {
        MoodgenError::Config(err)
    }
}

impl From<toml::de::Error> for MoodgenError {
    fn from(err: toml::de::Error) -> Self {
        MoodgenError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<String> for MoodgenError {
    fn from(msg: String) -> Self {
        MoodgenError::Generic(msg)
    }
}

impl From<&str> for MoodgenError {
    fn from(msg: &str) -> Self {
        MoodgenError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_not_wrapped() {
        let err: MoodgenError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.to_string(), "denied");
    }

    #[test]
    fn test_validation_error_display() {
        let err: MoodgenError = ValidationError::DuplicateId {
            id: "calm".to_string(),
            first: 1,
            second: 3,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid mood data: id 'calm' is used by records #1 and #3"
        );
    }

    #[test]
    fn test_toml_error_becomes_config_error() {
        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: MoodgenError = toml_err.into();
        assert!(matches!(err, MoodgenError::Config(ConfigError::InvalidFormat(_))));
    }
}
