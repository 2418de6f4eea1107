//! Plate record type
//!
//! The structured representation of a Japanese license plate's five
//! printed segments. Every field is always present on the wire; segments
//! the parser could not determine are empty strings, never null. Clients
//! key off field presence, so this shape is a compatibility contract.

use serde::{Deserialize, Serialize};

/// Parsed license plate fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateRecord {
    /// Place name of registration, e.g. "品川"
    pub region: String,
    /// 3-digit vehicle classification number, e.g. "500"
    pub classification: String,
    /// Single hiragana character, e.g. "あ"
    pub hiragana: String,
    /// Serial number as two 2-digit groups, e.g. "12-34"
    pub number: String,
    /// The normalized OCR text the record was parsed from
    pub full_text: String,
}

impl PlateRecord {
    /// A record with no recognized segments, carrying only the input text
    pub fn empty(full_text: impl Into<String>) -> Self {
        Self {
            full_text: full_text.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_serialized_when_empty() {
        let json = serde_json::to_value(PlateRecord::empty("")).unwrap();
        let obj = json.as_object().unwrap();

        for key in ["region", "classification", "hiragana", "number", "full_text"] {
            assert_eq!(obj.get(key).and_then(|v| v.as_str()), Some(""));
        }
    }
}
