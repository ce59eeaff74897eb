//! Mood data exporter
//!
//! Writes an ordered mood record sequence to `<output_dir>/<filename>` as a
//! pretty-printed JSON array. A run is a single pass:
//!
//! 1. Reject a filename that is not a plain file name
//! 2. Validate the records (unless disabled)
//! 3. Serialize them
//! 4. Create the output directory if needed
//! 5. Overwrite the output file
//!
//! Nothing touches the filesystem before step 4, so rejected input leaves
//! the output directory and any previous file untouched.
//!
//! # Example
//!
//! ```no_run
//! use moodgen::exporter::export;
//! use moodgen::record::default_moods;
//! use std::path::Path;
//!
//! let report = export(&default_moods(), Path::new("Assets/Data"), "mood_buttons.json")?;
//! println!("{report}");
//! # Ok::<(), moodgen::error::MoodgenError>(())
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::{is_plain_file_name, ExportConfig};
use crate::error::{ConfigError, Result};
use crate::record::{validate, MoodRecord};

pub mod writer;

pub use writer::{ensure_dir, render_json, write_file};

/// Options controlling a single export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// JSON indentation width in spaces
    pub indent: usize,

    /// Validate records before writing
    pub validate: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            validate: true,
        }
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            indent: config.indent,
            validate: config.validate,
        }
    }
}

/// Result of an export operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// File that was written
    pub path: PathBuf,
    /// Number of records exported
    pub records: usize,
    /// File size in bytes
    pub bytes: u64,
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mood button data saved to: {}", self.path.display())
    }
}

/// Serializes mood records to the UI data file
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    /// Create an exporter with the given options
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Get the export options
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Produce the exact text `export` would write, without writing it
    ///
    /// # Arguments
    /// * `records` - Records in output order
    ///
    /// # Returns
    /// * `Result<String>` - Serialized JSON array
    pub fn render(&self, records: &[MoodRecord]) -> Result<String> {
        if self.options.validate {
            validate(records)?;
        } else {
            warn!(
                "Record validation disabled, exporting {} record(s) unchecked",
                records.len()
            );
        }

        render_json(records, self.options.indent)
    }

    /// Write records to `output_dir/filename`
    ///
    /// The directory is created when missing and an existing file is
    /// replaced entirely.
    ///
    /// # Arguments
    /// * `records` - Records in output order
    /// * `output_dir` - Destination directory
    /// * `filename` - Plain file name inside `output_dir`
    ///
    /// # Returns
    /// * `Result<ExportReport>` - What was written, or the first error
    pub fn export(
        &self,
        records: &[MoodRecord],
        output_dir: &Path,
        filename: &str,
    ) -> Result<ExportReport> {
        if !is_plain_file_name(filename) {
            return Err(ConfigError::InvalidValue {
                field: "filename".to_string(),
                value: filename.to_string(),
            }
            .into());
        }

        let content = self.render(records)?;

        ensure_dir(output_dir)?;
        let path = output_dir.join(filename);
        let bytes = write_file(&path, &content)?;

        info!(
            "Exported {} mood record(s) to {} ({} bytes)",
            records.len(),
            path.display(),
            bytes
        );

        Ok(ExportReport {
            path,
            records: records.len(),
            bytes,
        })
    }
}

/// Export records with default options
///
/// Equivalent to `Exporter::default().export(records, output_dir, filename)`.
pub fn export(records: &[MoodRecord], output_dir: &Path, filename: &str) -> Result<ExportReport> {
    Exporter::default().export(records, output_dir, filename)
}
