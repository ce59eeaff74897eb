//! moodgen library
//!
//! Generates the mood button data file read by the MoodColor UI: an ordered
//! JSON array of `{ id, text, color_hex, icon_path }` objects.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `exporter`: JSON serialization and file output
//! - `record`: Mood records, the built-in set, validation and record files
//!
//! # Example
//!
//! ```no_run
//! use moodgen::{export, MoodRecord};
//! use std::path::Path;
//!
//! fn main() -> moodgen::Result<()> {
//!     let moods = vec![MoodRecord::new("happy", "Happy", "#FFD700", "Icons/HappyIcon")];
//!     let report = export(&moods, Path::new("Assets/Data"), "mood_buttons.json")?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod exporter;
pub mod record;

// Re-export commonly used types
pub use config::Config;
pub use error::{MoodgenError, Result};
pub use exporter::{export, ExportOptions, ExportReport, Exporter};
pub use record::{default_moods, MoodRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
