//! Schema checks for mood record sequences
//!
//! Validation is fail-fast: the first violation in sequence order is
//! reported and nothing after it is inspected.

use std::collections::HashMap;

use crate::error::ValidationError;

use super::MoodRecord;

/// Check that `value` is `#` followed by exactly six hex digits
pub fn is_hex_color(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit)
}

/// Validate a record sequence against the export schema
///
/// # Arguments
/// * `records` - Records in export order
///
/// # Returns
/// * `Result<(), ValidationError>` - First violation found, if any
pub fn validate(records: &[MoodRecord]) -> Result<(), ValidationError> {
    if records.is_empty() {
        return Err(ValidationError::NoRecords);
    }

    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        for (field, value) in record.fields() {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField { index, field });
            }
        }

        if !is_hex_color(&record.color_hex) {
            return Err(ValidationError::InvalidColor {
                id: record.id.clone(),
                value: record.color_hex.clone(),
            });
        }

        if let Some(&first) = seen.get(record.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: record.id.clone(),
                first,
                second: index,
            });
        }
        seen.insert(record.id.as_str(), index);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mood(id: &str, color: &str) -> MoodRecord {
        MoodRecord::new(id, id.to_uppercase(), color, format!("Icons/{id}"))
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#FFD700"));
        assert!(is_hex_color("#87ceeb"));
        assert!(!is_hex_color("FFD700"));
        assert!(!is_hex_color("#FFD70"));
        assert!(!is_hex_color("#FFD7000"));
        assert!(!is_hex_color("#GGGGGG"));
        assert!(!is_hex_color("#ЖЖЖ"));
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(validate(&[]), Err(ValidationError::NoRecords));
    }

    #[test]
    fn test_empty_field() {
        let mut record = mood("happy", "#FFD700");
        record.icon_path = "  ".to_string();
        assert_eq!(
            validate(&[mood("calm", "#87CEEB"), record]),
            Err(ValidationError::EmptyField {
                index: 1,
                field: "icon_path"
            })
        );
    }

    #[test]
    fn test_invalid_color() {
        assert_eq!(
            validate(&[mood("sad", "purple")]),
            Err(ValidationError::InvalidColor {
                id: "sad".to_string(),
                value: "purple".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_id() {
        let records = [
            mood("happy", "#FFD700"),
            mood("calm", "#87CEEB"),
            mood("happy", "#FF4500"),
        ];
        assert_eq!(
            validate(&records),
            Err(ValidationError::DuplicateId {
                id: "happy".to_string(),
                first: 0,
                second: 2
            })
        );
    }

    #[test]
    fn test_reports_first_violation() {
        let records = [mood("calm", "blue"), mood("calm", "#87CEEB")];
        assert!(matches!(
            validate(&records),
            Err(ValidationError::InvalidColor { .. })
        ));
    }
}
