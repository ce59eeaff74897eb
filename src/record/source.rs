//! Record sources
//!
//! Records reach the exporter from one of three places, checked in order:
//! an explicit record file, the `[[moods]]` tables of the configuration,
//! or the built-in mood set.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, Result, ValidationError};

use super::{default_moods, MoodRecord};

/// Where a resolved record sequence came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// Loaded from a record file given on the command line
    File(PathBuf),

    /// Taken from the configuration file
    Config,

    /// The built-in mood set
    BuiltIn,
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSource::File(path) => write!(f, "{}", path.display()),
            RecordSource::Config => write!(f, "configuration"),
            RecordSource::BuiltIn => write!(f, "built-in set"),
        }
    }
}

/// TOML record file layout: a list of `[[moods]]` tables
#[derive(Debug, Deserialize)]
struct MoodTable {
    #[serde(default)]
    moods: Vec<MoodRecord>,
}

/// Load records from a JSON or TOML file
///
/// JSON files hold the same array the exporter writes; TOML files hold
/// `[[moods]]` tables. The format is chosen by extension.
///
/// # Arguments
/// * `path` - Record file path
///
/// # Returns
/// * `Result<Vec<MoodRecord>>` - Records in file order
pub fn load_records(path: &Path) -> Result<Vec<MoodRecord>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let is_json = match extension.as_deref() {
        Some("json") => true,
        Some("toml") => false,
        _ => {
            return Err(ConfigError::UnsupportedRecordFile(path.display().to_string()).into());
        }
    };

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()).into());
    }

    let content = fs::read_to_string(path)?;
    let records: Vec<MoodRecord> = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str::<MoodTable>(&content)?.moods
    };
    debug!("Loaded {} mood record(s) from {}", records.len(), path.display());

    Ok(records)
}

/// Pick the record sequence to export
///
/// # Arguments
/// * `records_file` - Explicit record file, if any
/// * `configured` - Moods listed in the configuration
///
/// # Returns
/// * `Result<(Vec<MoodRecord>, RecordSource)>` - Records and their origin
pub fn resolve_records(
    records_file: Option<&Path>,
    configured: &[MoodRecord],
) -> Result<(Vec<MoodRecord>, RecordSource)> {
    if let Some(path) = records_file {
        let records = load_records(path)?;
        if records.is_empty() {
            return Err(ValidationError::NoRecords.into());
        }
        return Ok((records, RecordSource::File(path.to_path_buf())));
    }

    if !configured.is_empty() {
        return Ok((configured.to_vec(), RecordSource::Config));
    }

    Ok((default_moods(), RecordSource::BuiltIn))
}
