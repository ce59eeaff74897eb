//! Mood record model
//!
//! A [`MoodRecord`] describes one selectable mood button: a machine-readable
//! id, the localized label, the button color and the icon resource path.
//! Sequences of records are ordered; the order is the on-screen button order
//! in the consuming UI.

use serde::{Deserialize, Serialize};

pub mod source;
pub mod validate;

pub use source::{load_records, resolve_records, RecordSource};
pub use validate::{is_hex_color, validate};

/// One mood button entry.
///
/// Field declaration order is the key order of the exported JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRecord {
    /// Unique identifier within a sequence
    pub id: String,

    /// Display label shown on the button
    pub text: String,

    /// Button color in `#RRGGBB` form
    pub color_hex: String,

    /// Icon resource location, resolved by the consumer
    pub icon_path: String,
}

impl MoodRecord {
    /// Create a new record
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        color_hex: impl Into<String>,
        icon_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            color_hex: color_hex.into(),
            icon_path: icon_path.into(),
        }
    }

    /// Field names paired with their values, in export order
    pub(crate) fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("id", &self.id),
            ("text", &self.text),
            ("color_hex", &self.color_hex),
            ("icon_path", &self.icon_path),
        ]
    }
}

/// The mood set shipped with the application.
///
/// Used whenever neither a record file nor the configuration supplies moods.
pub fn default_moods() -> Vec<MoodRecord> {
    vec![
        MoodRecord::new("happy", "Счастливый", "#FFD700", "Icons/HappyIcon"),
        MoodRecord::new("calm", "Спокойный", "#87CEEB", "Icons/CalmIcon"),
        MoodRecord::new("sad", "Грустный", "#6A5ACD", "Icons/SadIcon"),
        MoodRecord::new("energetic", "Энергичный", "#FF4500", "Icons/EnergeticIcon"),
        MoodRecord::new("relaxed", "Расслабленный", "#32CD32", "Icons/RelaxedIcon"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_moods_order() {
        let ids: Vec<_> = default_moods().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, ["happy", "calm", "sad", "energetic", "relaxed"]);
    }

    #[test]
    fn test_default_moods_are_valid() {
        assert!(validate(&default_moods()).is_ok());
    }

    #[test]
    fn test_serialized_key_order() {
        let record = MoodRecord::new("happy", "Happy", "#FFD700", "Icons/HappyIcon");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r##"{"id":"happy","text":"Happy","color_hex":"#FFD700","icon_path":"Icons/HappyIcon"}"##
        );
    }
}
