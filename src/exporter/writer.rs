//! JSON array writer
//!
//! Serializes mood records into the pretty-printed array consumed by the UI
//! and writes it to disk.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{MoodgenError, Result};
use crate::record::MoodRecord;

/// Serialize records to a JSON array
///
/// Non-ASCII text is written as-is. An `indent` of zero produces compact
/// single-line output.
///
/// # Arguments
/// * `records` - Records in output order
/// * `indent` - Indentation width in spaces
///
/// # Returns
/// * `Result<String>` - JSON text without a trailing newline
pub fn render_json(records: &[MoodRecord], indent: usize) -> Result<String> {
    let mut buf = Vec::with_capacity(records.len() * 128);

    if indent == 0 {
        serde_json::to_writer(&mut buf, records)?;
    } else {
        let indent = " ".repeat(indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut serializer)?;
    }

    String::from_utf8(buf).map_err(|e| MoodgenError::Generic(format!("Invalid UTF-8 output: {e}")))
}

/// Create `dir` and any missing ancestors
///
/// An existing directory is left alone. A path component that exists as a
/// regular file makes this fail with the underlying I/O error.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(dir)?;
    debug!("Created output directory: {}", dir.display());
    Ok(())
}

/// Replace the contents of `path` with `content`
pub fn write_file(path: &Path, content: &str) -> Result<u64> {
    fs::write(path, content)?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(content.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn happy() -> MoodRecord {
        MoodRecord::new("happy", "Happy", "#FFD700", "Icons/HappyIcon")
    }

    #[test]
    fn test_render_four_space_indent() {
        let json = render_json(&[happy()], 4).unwrap();
        let expected = r##"[
    {
        "id": "happy",
        "text": "Happy",
        "color_hex": "#FFD700",
        "icon_path": "Icons/HappyIcon"
    }
]"##;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_render_compact() {
        let json = render_json(&[happy()], 0).unwrap();
        assert_eq!(
            json,
            r##"[{"id":"happy","text":"Happy","color_hex":"#FFD700","icon_path":"Icons/HappyIcon"}]"##
        );
    }

    #[test]
    fn test_render_keeps_non_ascii() {
        let record = MoodRecord::new("sad", "Грустный", "#6A5ACD", "Icons/SadIcon");
        let json = render_json(&[record], 4).unwrap();
        assert!(json.contains("\"Грустный\""));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Assets").join("Data");
        ensure_dir(&target).unwrap();
        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_dir_over_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("Assets");
        fs::write(&blocker, "not a directory").unwrap();
        let result = ensure_dir(&blocker.join("Data"));
        assert!(matches!(result, Err(MoodgenError::Io(_))));
    }
}
